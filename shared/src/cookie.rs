/// Finds `name` in a `document.cookie` style string (`a=1; b=2`).
///
/// The raw value is returned; percent-decoding is left to the caller.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
}
