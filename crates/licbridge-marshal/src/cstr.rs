/// Read a string out of a native-filled byte buffer.
///
/// Decodes bytes up to the first NUL, or the entire buffer when no terminator
/// is present. Malformed UTF-8 is replaced per standard lossy decoding; this
/// never fails. A native string longer than the buffer is silently truncated
/// at capacity — callers who need guaranteed completeness must size buffers
/// above the native call's maximum possible output.
pub fn extract_cstring(buf: &[u8]) -> String {
    let end = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}
