//! Value codec trait definitions.

/// Value codec trait.
///
/// Maps logical values to the strings written into the store file and back.
///
/// # Thread Safety
///
/// Codecs must be `Send + Sync` so a store handle can move between threads.
pub trait ValueCodec: Send + Sync {
    /// Encode a value for storage.
    ///
    /// The returned string is what gets written to disk.
    fn encode(&self, value: &str) -> String;

    /// Decode a value read from storage.
    ///
    /// Reverses the encode operation. Strings the codec did not produce
    /// (e.g., a hand-edited file) still decode to some text; a stored value
    /// never makes a read fail.
    fn decode(&self, encoded: &str) -> String;
}
