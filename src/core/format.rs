//! Brace-style message formatting
//!
//! Templates contain literal text and placeholders: `{}` (next automatic
//! index), `{N}` (explicit index), `{:spec}` and `{N:spec}`. `{{` and `}}`
//! produce literal braces. Malformed templates never fail: an unterminated
//! `{` copies the rest of the template verbatim and an index past the end of
//! the argument list renders nothing.
//!
//! The specifier grammar is `[0][width][.precision][flags]`, where flags are
//! any of `x X d o f e b u U`:
//!
//! | flag | effect                                   |
//! |------|------------------------------------------|
//! | `x`  | lowercase hexadecimal                    |
//! | `X`  | uppercase hexadecimal                    |
//! | `d`  | decimal                                  |
//! | `o`  | octal                                    |
//! | `f`  | fixed-point floats                       |
//! | `e`  | scientific floats                        |
//! | `b`  | booleans as `true`/`false`               |
//! | `u`, `U` | uppercase digits, exponent and `inf`/`nan` |
//!
//! Unknown flag characters are ignored.
//!
//! # Examples
//!
//! ```
//! use rust_pattern_logger::core::format::{format, Arg};
//!
//! assert_eq!(format("{1} {0}!", &[Arg::from("World"), Arg::from("Hello")]), "Hello World!");
//! assert_eq!(format("Pi: {:.2f}", &[Arg::from(3.14159)]), "Pi: 3.14");
//! assert_eq!(format("Hex: 0x{:04X}", &[Arg::from(255)]), "Hex: 0x00FF");
//! ```

use std::borrow::Cow;
use std::fmt;

/// Digits used for floats when no precision is given
const DEFAULT_PRECISION: usize = 6;

/// Upper bound for a specifier's width; larger requests are clamped
pub const MAX_WIDTH: usize = 4096;

/// Upper bound for a specifier's precision; larger requests are clamped
pub const MAX_PRECISION: usize = 1024;

/// One captured argument of a log call.
///
/// Signed integers remember their bit width so hexadecimal and octal output of
/// negative values shows the two's complement of the original type.
pub enum Arg<'a> {
    Int { value: i64, bits: u32 },
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(Cow<'a, str>),
    Display(&'a dyn fmt::Display),
}

impl<'a> Arg<'a> {
    /// Capture any value through its `Display` implementation
    pub fn display<T: fmt::Display>(value: &'a T) -> Self {
        Arg::Display(value)
    }

    /// Append this argument to `out`, shaped by `spec`
    pub fn render_into(&self, out: &mut String, spec: &FormatSpec) {
        let (body, numeric) = match self {
            Arg::Int { value, bits } => {
                let body = match spec.radix {
                    Radix::Decimal => value.to_string(),
                    _ => radix_digits((*value as u64) & width_mask(*bits), spec),
                };
                (body, true)
            }
            Arg::UInt(value) => (radix_digits(*value, spec), true),
            Arg::Float(value) => (float_body(*value, spec), true),
            Arg::Bool(value) => {
                let body = match (spec.bool_words, value) {
                    (true, true) => "true",
                    (true, false) => "false",
                    (false, true) => "1",
                    (false, false) => "0",
                };
                (body.to_string(), false)
            }
            Arg::Char(c) => (c.to_string(), false),
            Arg::Str(s) => (s.to_string(), false),
            Arg::Display(d) => (d.to_string(), false),
        };
        pad_into(out, &body, spec, numeric);
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int { value, bits } => write!(f, "Int({value}, i{bits})"),
            Arg::UInt(value) => write!(f, "UInt({value})"),
            Arg::Float(value) => write!(f, "Float({value})"),
            Arg::Bool(value) => write!(f, "Bool({value})"),
            Arg::Char(value) => write!(f, "Char({value:?})"),
            Arg::Str(value) => write!(f, "Str({value:?})"),
            Arg::Display(value) => write!(f, "Display({value})"),
        }
    }
}

macro_rules! signed_args {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg<'_> {
            fn from(value: $t) -> Self {
                Arg::Int { value: value as i64, bits: <$t>::BITS }
            }
        })*
    };
}

macro_rules! unsigned_args {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg<'_> {
            fn from(value: $t) -> Self {
                Arg::UInt(value as u64)
            }
        })*
    };
}

signed_args!(i8, i16, i32, i64, isize);
unsigned_args!(u8, u16, u32, u64, usize);

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Arg<'_> {
    fn from(value: String) -> Self {
        Arg::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Arg<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Arg::Str(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Radix {
    #[default]
    Decimal,
    Hex,
    Octal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Six significant digits, switching to scientific for large or tiny values
    #[default]
    General,
    Fixed,
    Scientific,
}

/// Parsed `[0][width][.precision][flags]` specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSpec {
    pub zero_fill: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub radix: Radix,
    pub notation: Notation,
    pub uppercase: bool,
    pub bool_words: bool,
}

impl FormatSpec {
    /// Parse a specifier; anything unrecognized is ignored
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let mut parsed = FormatSpec::default();
        let mut rest = spec;

        if let Some(tail) = rest.strip_prefix('0') {
            parsed.zero_fill = true;
            rest = tail;
        }

        let (width, tail) = split_digits(rest);
        parsed.width = width.map(|w| w.min(MAX_WIDTH));
        rest = tail;

        if let Some(tail) = rest.strip_prefix('.') {
            let (precision, tail) = split_digits(tail);
            parsed.precision = precision.map(|p| p.min(MAX_PRECISION));
            rest = tail;
        }

        for flag in rest.chars() {
            match flag {
                'x' => parsed.radix = Radix::Hex,
                'X' => {
                    parsed.radix = Radix::Hex;
                    parsed.uppercase = true;
                }
                'd' => parsed.radix = Radix::Decimal,
                'o' => parsed.radix = Radix::Octal,
                'f' => parsed.notation = Notation::Fixed,
                'e' => parsed.notation = Notation::Scientific,
                'b' => parsed.bool_words = true,
                'u' | 'U' => parsed.uppercase = true,
                _ => {}
            }
        }

        // a precision alone means fixed-point
        if parsed.precision.is_some() && parsed.notation == Notation::General {
            parsed.notation = Notation::Fixed;
        }

        parsed
    }
}

/// Render `template` with `args`.
///
/// With no arguments, placeholders are left untouched and only the `{{`/`}}`
/// escapes are collapsed.
#[must_use]
pub fn format(template: &str, args: &[Arg<'_>]) -> String {
    if args.is_empty() {
        return collapse_escapes(template);
    }

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut rest = template;
    let mut next_auto = 0usize;

    loop {
        let Some(pos) = rest.find(['{', '}']) else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if let Some(after) = tail.strip_prefix('}') {
            // `}}` collapses, a stray `}` is kept as is
            out.push('}');
            rest = after.strip_prefix('}').unwrap_or(after);
            continue;
        }

        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            break;
        };

        let (index, spec) = resolve_placeholder(&tail[1..close], &mut next_auto);
        if let Some(arg) = args.get(index) {
            arg.render_into(&mut out, &FormatSpec::parse(spec));
        }
        rest = &tail[close + 1..];
    }

    out
}

/// Split placeholder content into (argument index, specifier).
///
/// Only implicit placeholders advance the automatic counter.
fn resolve_placeholder<'t>(content: &'t str, next_auto: &mut usize) -> (usize, &'t str) {
    let digits = content.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        let after = &content[digits..];
        if after.is_empty() || after.starts_with(':') {
            // an index too large for usize is simply out of range
            let index = content[..digits].parse().unwrap_or(usize::MAX);
            return (index, after.strip_prefix(':').unwrap_or(after));
        }
    }

    let index = *next_auto;
    *next_auto += 1;
    let spec = content.split_once(':').map_or("", |(_, spec)| spec);
    (index, spec)
}

fn collapse_escapes(template: &str) -> String {
    if !template.contains("{{") && !template.contains("}}") {
        return template.to_string();
    }
    template.replace("{{", "{").replace("}}", "}")
}

fn split_digits(s: &str) -> (Option<usize>, &str) {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return (None, s);
    }
    // too many digits for usize still means "as large as allowed"
    (Some(s[..end].parse().unwrap_or(usize::MAX)), &s[end..])
}

fn width_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

fn radix_digits(value: u64, spec: &FormatSpec) -> String {
    match spec.radix {
        Radix::Decimal => value.to_string(),
        Radix::Hex if spec.uppercase => format!("{:X}", value),
        Radix::Hex => format!("{:x}", value),
        Radix::Octal => format!("{:o}", value),
    }
}

fn float_body(value: f64, spec: &FormatSpec) -> String {
    let text = if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let inf = if value < 0.0 { "-inf" } else { "inf" };
        inf.to_string()
    } else {
        match spec.notation {
            Notation::Fixed => {
                format!("{:.*}", spec.precision.unwrap_or(DEFAULT_PRECISION), value)
            }
            Notation::Scientific => {
                scientific(value, spec.precision.unwrap_or(DEFAULT_PRECISION))
            }
            Notation::General => general(value, DEFAULT_PRECISION),
        }
    };

    if spec.uppercase {
        text.to_ascii_uppercase()
    } else {
        text
    }
}

/// `d.ddde+XX` with at least two exponent digits
fn scientific(value: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
        }
        None => raw,
    }
}

fn general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let probe = format!("{:.*e}", precision - 1, value);
    let exponent: i32 = probe
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sci = scientific(value, precision - 1);
        match sci.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{}", trim_fraction(mantissa), exp),
            None => sci,
        }
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Right-align `body` to the requested width
fn pad_into(out: &mut String, body: &str, spec: &FormatSpec, numeric: bool) {
    let len = body.chars().count();
    let width = spec.width.unwrap_or(0);
    if len >= width {
        out.push_str(body);
        return;
    }

    let fill = width - len;
    if spec.zero_fill {
        let (sign, digits) = match body.as_bytes().first() {
            Some(b'-') | Some(b'+') if numeric => body.split_at(1),
            _ => ("", body),
        };
        out.push_str(sign);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(digits);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(body);
    }
}
