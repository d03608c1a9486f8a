use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Splits a size spec into a leading numeric run and the remaining suffix.
    /// A single trailing newline is allowed and dropped; validation of both
    /// halves happens afterwards.
    static ref SIZE_SPEC: Regex = Regex::new(r"^([0-9.]*)(.*)\n?$").unwrap();

    /// Strings the size processor treats as size specs: "12pt", "1.5em", ".5in"
    static ref SIZE_LIKE: Regex = Regex::new(r"^[0-9]*\.?[0-9]+[A-Za-z]+$").unwrap();
}

/// A size spec split into its magnitude and unit suffix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeToken<'a> {
    pub magnitude: f64,
    pub suffix: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The numeric prefix is empty or isn't a valid number
    MalformedNumber,
}

/// Split `spec` into magnitude and suffix. The suffix is returned as written
/// (possibly empty); whether it names a known unit is up to the caller.
pub fn tokenize(spec: &str) -> Result<SizeToken<'_>, TokenError> {
    // `.` never matches a newline, so interior newlines fall through here
    let captures = SIZE_SPEC
        .captures(spec)
        .ok_or(TokenError::MalformedNumber)?;
    let number = captures.get(1).map_or("", |m| m.as_str());
    let suffix = captures.get(2).map_or("", |m| m.as_str());

    let magnitude = number
        .parse::<f64>()
        .map_err(|_| TokenError::MalformedNumber)?;

    Ok(SizeToken { magnitude, suffix })
}

/// Check if a string looks like a size spec
pub fn looks_like_size_spec(s: &str) -> bool {
    SIZE_LIKE.is_match(s)
}
