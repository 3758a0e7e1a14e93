//! Type-directed parsing of raw input text.

use crate::outcome::Outcome;

pub(crate) const EMPTY_INPUT_MESSAGE: &str = "Input cannot be empty.";

/// A type that can be parsed from one line of raw terminal input.
///
/// This is the crate's parser registry: [`Prompt`](crate::input::Prompt)
/// targets any `T: FromInput`, the crate registers implementations for
/// `String`, `bool`, `char`, and the primitive numeric types, and callers
/// bring their own types into the registry by implementing the trait -
/// there is no runtime reflection fallback.
///
/// Parsing is locale-invariant (numeric types go through [`str::parse`])
/// and total: bad input produces a failure, never a panic. Empty input is a
/// parse failure for every built-in implementation.
///
/// # Examples
///
/// ```rust
/// use termflow::input::FromInput;
/// use termflow::outcome::Outcome;
///
/// struct Port(u16);
///
/// impl FromInput for Port {
///     fn type_label() -> &'static str {
///         "port"
///     }
///
///     fn from_input(raw: &str) -> Outcome<Self> {
///         u16::from_input(raw).map(Port)
///     }
/// }
///
/// assert!(Port::from_input("8080").is_success());
/// assert!(Port::from_input("eighty").is_failure());
/// ```
pub trait FromInput: Sized {
    /// Short human-readable name for this type, used to derive the default
    /// prompt (`"Please enter <label>: "`).
    fn type_label() -> &'static str;

    /// Parses one line of raw input into `Self`.
    fn from_input(raw: &str) -> Outcome<Self>;
}

impl FromInput for String {
    fn type_label() -> &'static str {
        "text"
    }

    fn from_input(raw: &str) -> Outcome<Self> {
        if raw.is_empty() {
            return Outcome::failure(EMPTY_INPUT_MESSAGE);
        }
        Outcome::success(raw.to_string())
    }
}

macro_rules! from_input_via_parse {
    ($($target:ty => $label:literal),+ $(,)?) => {
        $(
            impl FromInput for $target {
                fn type_label() -> &'static str {
                    $label
                }

                fn from_input(raw: &str) -> Outcome<Self> {
                    if raw.is_empty() {
                        return Outcome::failure(EMPTY_INPUT_MESSAGE);
                    }
                    raw.parse::<$target>().map_or_else(
                        |_| Outcome::failure(format!("Cannot parse '{raw}' as {}.", $label)),
                        Outcome::success,
                    )
                }
            }
        )+
    };
}

from_input_via_parse! {
    bool => "boolean",
    char => "character",
    i8 => "integer",
    i16 => "integer",
    i32 => "integer",
    i64 => "integer",
    i128 => "integer",
    isize => "integer",
    u8 => "number",
    u16 => "number",
    u32 => "number",
    u64 => "number",
    u128 => "number",
    usize => "number",
    f32 => "decimal",
    f64 => "decimal",
}
