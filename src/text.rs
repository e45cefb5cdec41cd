/// Lower-case `s`, folding the Turkish dotted capital `İ` to a plain `i`.
///
/// `char::to_lowercase` maps `İ` to `i` followed by a combining dot, which
/// would make "BİBER" and "biber" distinct.
pub fn fold_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == 'İ' {
            out.push('i');
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_case_turkish_dotted_i() {
        assert_eq!(fold_case("BİBER"), "biber");
        assert_eq!(fold_case("Soğan"), "soğan");
        assert_eq!(fold_case("ÇORBA"), "çorba");
    }
}
