use super::to_tokens::ToTokens;

/// Trait for building text output.
///
/// `Printer` is the write path of both formats: the gloss serializer prints
/// gloss tokens, and the document renderer prints segments, handing each
/// gloss to a translation function. [`ToTokens`] implementations drive it.
///
/// # Associated Types
///
/// - `Token`: The unit the printer knows how to format itself
///
/// # Required Methods
///
/// - `buf()`: Get current buffer contents
/// - `buf_mut()`: Get mutable buffer for appending
/// - `into_string()`: Consume and return final output
/// - `token(t)`: Format a token
///
/// # Example
///
/// ```ignore
/// use au_core::Printer;
///
/// #[derive(Default)]
/// struct Shouting {
///     buf: String,
/// }
///
/// impl Printer for Shouting {
///     type Token = String;
///
///     fn buf(&self) -> &str { &self.buf }
///     fn buf_mut(&mut self) -> &mut String { &mut self.buf }
///     fn into_string(self) -> String { self.buf }
///
///     fn token(&mut self, t: &String) {
///         self.word(&t.to_uppercase());
///     }
/// }
/// ```
pub trait Printer: Sized {
    /// The token type this printer formats.
    type Token;

    /// Get the current buffer contents.
    fn buf(&self) -> &str;
    /// Get a mutable reference to the buffer for appending.
    fn buf_mut(&mut self) -> &mut String;
    /// Consume the printer and return the final string.
    fn into_string(self) -> String;

    /// Format a token to text.
    fn token(&mut self, t: &Self::Token);

    /// Append a string to the buffer verbatim.
    fn word(&mut self, s: &str) {
        self.buf_mut().push_str(s);
    }

    /// Append a single character to the buffer.
    fn char(&mut self, c: char) {
        self.buf_mut().push(c);
    }

    /// Write a value implementing `ToTokens`.
    fn write<T: ToTokens<Self> + ?Sized>(&mut self, value: &T) {
        value.write(self);
    }
}
