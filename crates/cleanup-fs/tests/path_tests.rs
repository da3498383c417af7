use cleanup_fs::NormalizedPath;
use rstest::rstest;

#[rstest]
#[case("src/app/resume-service.ts", Some("resume-service.ts"))]
#[case("src\\app\\resume-service.ts", Some("resume-service.ts"))]
#[case("plan.toml", Some("plan.toml"))]
#[case("src/app/", Some("app"))]
#[case("", None)]
fn test_file_name(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).file_name(), expected);
}

#[rstest]
#[case("plan.toml", Some("toml"))]
#[case("src/app/resume-service.ts", Some("ts"))]
#[case(".hidden", None)]
#[case("Makefile", None)]
fn test_extension(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).extension(), expected);
}

#[test]
fn test_backslashes_normalized() {
    let path = NormalizedPath::new("src\\app\\resume-service.ts");
    assert_eq!(path.as_str(), "src/app/resume-service.ts");
}

