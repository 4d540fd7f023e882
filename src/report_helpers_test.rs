use super::*;

#[test]
fn separator_width() {
    let s = separator(5);
    // Each ─ is 3 bytes in UTF-8
    assert_eq!(s.chars().count(), 5);
}

#[test]
fn print_json_stdout_works() {
    let data = vec![1, 2, 3];
    print_json_stdout(&data).unwrap();
}

#[test]
fn format_count_integral_and_fractional() {
    assert_eq!(format_count(0.0), "0");
    assert_eq!(format_count(1234.0), "1234");
    assert_eq!(format_count(2.5), "2.5");
}
