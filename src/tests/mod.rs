fn random_secret(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    getrandom::getrandom(&mut buf).expect("getrandom failed");
    buf
}

/// All valid (unordered) share index pairs.
const SHARE_PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];
