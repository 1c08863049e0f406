use super::*;

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_file_flag_before_command() {
    let (path, rest) = split_global(&argv(&["--file", "league.json", "standings", "--json"]));
    assert_eq!(path, PathBuf::from("league.json"));
    assert_eq!(rest, argv(&["standings", "--json"]));
}

#[test]
fn test_file_flag_after_command() {
    let (path, rest) = split_global(&argv(&["result", "3f2a", "--file", "cup.json", "team1"]));
    assert_eq!(path, PathBuf::from("cup.json"));
    assert_eq!(rest, argv(&["result", "3f2a", "team1"]));
    assert_eq!(positionals(&rest[1..]), vec!["3f2a", "team1"]);
}

#[test]
fn test_default_file() {
    let (path, rest) = split_global(&argv(&["fixtures"]));
    assert_eq!(path, PathBuf::from(DEFAULT_FILE));
    assert_eq!(rest, argv(&["fixtures"]));
}
