use super::*;

fn parse_hsl(token: &str) -> (u32, u32, u32) {
    let inner = token.strip_prefix("hsl(").and_then(|s| s.strip_suffix(')')).unwrap();
    let parts: Vec<&str> = inner.split(' ').collect();
    assert_eq!(parts.len(), 3, "unexpected token {token}");
    let h = parts[0].parse().unwrap();
    let s = parts[1].trim_end_matches('%').parse().unwrap();
    let l = parts[2].trim_end_matches('%').parse().unwrap();
    (h, s, l)
}

#[test]
fn pastel_tokens_stay_in_range() {
    let mut colors = PastelColors::seeded(7);
    for _ in 0..200 {
        let (h, s, l) = parse_hsl(colors.next_color().as_str());
        assert!(h < 360);
        assert!((60..80).contains(&s));
        assert!((55..63).contains(&l));
    }
}

#[test]
fn same_seed_same_sequence() {
    let mut a = PastelColors::seeded(99);
    let mut b = PastelColors::seeded(99);
    for _ in 0..10 {
        assert_eq!(a.next_color(), b.next_color());
    }
}

#[test]
fn from_seed_some_matches_seeded() {
    let mut a = PastelColors::from_seed(Some(3));
    let mut b = PastelColors::seeded(3);
    assert_eq!(a.next_color(), b.next_color());
}

#[test]
fn from_seed_none_still_produces_tokens() {
    let mut colors = PastelColors::from_seed(None);
    assert!(colors.next_color().as_str().starts_with("hsl("));
}

#[test]
fn fixed_color_repeats() {
    let mut fixed = FixedColor(Color::new("#abcdef"));
    assert_eq!(fixed.next_color().as_str(), "#abcdef");
    assert_eq!(fixed.next_color().as_str(), "#abcdef");
}

#[test]
fn color_display_is_raw_token() {
    assert_eq!(Color::new("red").to_string(), "red");
}
