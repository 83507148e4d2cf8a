use super::printer::Printer;

/// Trait for converting parsed values back to text.
///
/// `ToTokens` is the inverse of parsing. It is generic over the printer so
/// one value can be printed in more than one way: a `Segment` prints through
/// any printer whose token is a `Gloss`, whatever that printer does with
/// glosses.
///
/// # Blanket Implementations
///
/// - `Vec<T>`: Writes each element in sequence
pub trait ToTokens<P: Printer> {
    /// Write this value to the printer.
    fn write(&self, printer: &mut P);

    /// Write into `printer` and return everything it holds.
    fn to_string_with(&self, mut printer: P) -> String {
        self.write(&mut printer);
        printer.into_string()
    }
}

impl<P: Printer, T: ToTokens<P>> ToTokens<P> for Vec<T> {
    fn write(&self, p: &mut P) {
        for item in self {
            item.write(p);
        }
    }
}
