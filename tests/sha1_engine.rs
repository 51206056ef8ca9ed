use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use sha1::Digest as _;
use sha1_fp::{hash, hash_chunks, ErrorKind, Sha1, OUTPUT_SIZE};

fn expected_digest(hex: &str) -> [u8; OUTPUT_SIZE] {
    let bytes = hex::decode(hex).expect("hex");
    let mut arr = [0u8; OUTPUT_SIZE];
    arr.copy_from_slice(&bytes);
    arr
}

#[test]
fn standard_vectors() {
    let cases: &[(&[u8], &str)] = &[
        (&b""[..], "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        (&b"abc"[..], "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (
            &b"The quick brown fox jumps over the lazy dog"[..],
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
        ),
        (
            &b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"[..],
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
        ),
    ];
    for &(input, expected) in cases {
        assert_eq!(hash(input).expect("sha1 hash"), expected_digest(expected));
    }
}

#[test]
fn million_byte_vector() {
    let input = vec![b'a'; 1_000_000];
    assert_eq!(
        hash(&input).expect("sha1 hash"),
        expected_digest("34aa973cd4c4daa4f61eeb2bdbad27316534016f")
    );
}

#[test]
fn every_split_matches_one_shot() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut data = vec![0u8; 200];
    rng.fill_bytes(&mut data);
    let one_shot = hash(&data).expect("sha1 hash");

    for split in 0..=data.len() {
        let mut engine = Sha1::new();
        engine.update(&data[..split]).expect("update");
        engine.update(&data[split..]).expect("update");
        let digest = engine.finalize().expect("finalize");
        assert_eq!(digest.to_bytes(), one_shot, "split at {split}");
    }
}

#[test]
fn chunked_feeding_matches_one_shot() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut data = vec![0u8; 500];
    rng.fill_bytes(&mut data);
    let one_shot = hash(&data).expect("sha1 hash");

    for chunk_size in [1, 3, 7, 63, 64, 65, 128] {
        let mut engine = Sha1::new();
        for chunk in data.chunks(chunk_size) {
            engine.update(chunk).expect("update");
        }
        let digest = engine.finalize().expect("finalize");
        assert_eq!(digest.to_bytes(), one_shot, "chunk size {chunk_size}");
    }
}

#[test]
fn matches_reference_implementation_across_lengths() {
    // Sweeps both padding boundaries (55 bytes: single padded block; 56
    // bytes: terminator and length spill into a second block) and several
    // full multi-block sizes.
    let mut rng = StdRng::seed_from_u64(1337);
    for len in 0..=257 {
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        let ours = hash(&data).expect("sha1 hash");
        let theirs = sha1::Sha1::digest(&data);
        assert_eq!(&ours[..], &theirs[..], "length {len}");
    }
}

#[test]
fn hash_chunks_matches_reference_over_partitions() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data = vec![0u8; 300];
    rng.fill_bytes(&mut data);
    let reference = sha1::Sha1::digest(&data);

    for boundary in [1, 64, 100, 299] {
        let (head, tail) = data.split_at(boundary);
        let digest = hash_chunks(&[head, tail]).expect("sha1 hash");
        assert_eq!(&digest[..], &reference[..], "boundary at {boundary}");
    }
}

#[test]
fn finalized_engine_rejects_further_use() {
    let mut engine = Sha1::new();
    engine.update(b"abc").expect("update");
    let digest = engine.finalize().expect("finalize");
    assert_eq!(
        digest.to_bytes(),
        expected_digest("a9993e364706816aba3e25717850c26c9cd0d89d")
    );

    let err = engine.update(b"x").expect_err("update must fail");
    assert!(matches!(err.kind(), ErrorKind::UseAfterFinalize));
    let err = engine.finalize().expect_err("finalize must fail");
    assert!(matches!(err.kind(), ErrorKind::UseAfterFinalize));

    // A fresh engine is unaffected by the misuse of another instance.
    assert_eq!(
        hash(b"abc").expect("sha1 hash"),
        expected_digest("a9993e364706816aba3e25717850c26c9cd0d89d")
    );
}
