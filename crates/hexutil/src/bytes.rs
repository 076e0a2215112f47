/// Left-pad `data` with zero bytes up to `length`.
///
/// Input that is already `length` bytes or longer is returned unchanged, it
/// is never truncated.
pub fn left_pad_bytes(data: &[u8], length: usize) -> Vec<u8> {
    if data.len() >= length {
        return data.to_vec();
    }

    let mut padded = vec![0u8; length];
    padded[length - data.len()..].copy_from_slice(data);
    padded
}
