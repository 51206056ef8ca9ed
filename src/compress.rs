#![forbid(unsafe_code)]

/// One message block: 512 bits, sixteen big-endian 32-bit words.
pub const BLOCK_SIZE: usize = 64;

/// Words carried between blocks (H0..H4).
pub const STATE_WORDS: usize = 5;

const SCHEDULE_LEN: usize = 80;

/// Chaining values every computation starts from.
pub const INITIAL_STATE: [u32; STATE_WORDS] = [
    0x6745_2301,
    0xEFCD_AB89,
    0x98BA_DCFE,
    0x1032_5476,
    0xC3D2_E1F0,
];

/// Round constant for round `t`.
#[inline]
fn round_constant(t: usize) -> u32 {
    match t {
        0..=19 => 0x5A82_7999,
        20..=39 => 0x6ED9_EBA1,
        40..=59 => 0x8F1B_BCDC,
        _ => 0xCA62_C1D6,
    }
}

/// Nonlinear mixing function for round `t`.
#[inline]
fn round_function(t: usize, b: u32, c: u32, d: u32) -> u32 {
    match t {
        0..=19 => (b & c) | (!b & d),
        20..=39 => b ^ c ^ d,
        40..=59 => (b & c) | (b & d) | (c & d),
        _ => b ^ c ^ d,
    }
}

fn message_schedule(block: &[u8; BLOCK_SIZE]) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes(chunk.try_into().expect("word"));
    }
    for t in 16..SCHEDULE_LEN {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    w
}

/// Fold one block into the chaining state and return the successor state.
///
/// Pure and total: any state and any 64-byte block are valid inputs. The
/// engine drives this function once per consumed block; it holds no state
/// of its own.
pub fn compress(state: [u32; STATE_WORDS], block: &[u8; BLOCK_SIZE]) -> [u32; STATE_WORDS] {
    let w = message_schedule(block);

    let [mut a, mut b, mut c, mut d, mut e] = state;

    for (t, word) in w.iter().enumerate() {
        let temp = a
            .rotate_left(5)
            .wrapping_add(round_function(t, b, c, d))
            .wrapping_add(e)
            .wrapping_add(*word)
            .wrapping_add(round_constant(t));
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
        state[4].wrapping_add(e),
    ]
}
