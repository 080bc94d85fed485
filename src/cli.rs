//! Command-line argument parsing for BatteryIQ

/// Parsed command line arguments
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub plan_path: Option<String>,
    pub json: bool,
    pub strict: bool,
    /// Raw "DAY" and "HH:MM" for a rate lookup
    pub at: Option<(String, String)>,
    pub help: bool,
}

pub fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    parse_args_from(&args)
}

/// Parse from an explicit argument list (first element is the program name)
pub fn parse_args_from(args: &[String]) -> Args {
    let mut result = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => result.json = true,
            "--strict" => result.strict = true,
            "--help" | "-h" => result.help = true,
            "--at" => {
                if i + 2 < args.len() {
                    result.at = Some((args[i + 1].clone(), args[i + 2].clone()));
                    i += 2;
                } else {
                    // Incomplete lookup request, show usage instead
                    result.help = true;
                    i = args.len();
                }
            }
            arg if arg.starts_with('-') => {}
            arg => {
                if result.plan_path.is_none() {
                    result.plan_path = Some(arg.to_string());
                }
            }
        }
        i += 1;
    }

    result
}

pub fn print_help() {
    println!("BatteryIQ - Tariff Coverage Checker\n");
    println!("USAGE:");
    println!("    batteryiq [OPTIONS] [PLAN_FILE]\n");
    println!("OPTIONS:");
    println!("    --json              Print the coverage report as JSON");
    println!("    --strict            Fail on overlapping rates as well as gaps");
    println!("    --at DAY HH:MM      Print the rates that apply at a time (e.g. --at TUE 07:30)");
    println!("    --help, -h          Show this help message\n");
    println!("ENVIRONMENT:");
    println!("    BATTERYIQ_PLAN_PATH   Plan file used when PLAN_FILE is omitted");
    println!("    BATTERYIQ_OUTPUT      text (default) or json");
    println!("    BATTERYIQ_STRICT      Same as --strict when true");
    println!("    RUST_LOG              Log filter (logs go to stderr)\n");
    println!("EXIT STATUS:");
    println!("    0  plan covers every minute of the week");
    println!("    1  gaps found (or overlaps with --strict)");
    println!("    2  plan or configuration could not be loaded");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("batteryiq")
            .chain(list.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_parse_args_default() {
        let result = parse_args_from(&args(&[]));
        assert_eq!(result, Args::default());
    }

    #[test]
    fn test_parse_args_plan_path() {
        let result = parse_args_from(&args(&["plan.json"]));
        assert_eq!(result.plan_path.as_deref(), Some("plan.json"));
        assert!(!result.json);
    }

    #[test]
    fn test_parse_args_flags() {
        let result = parse_args_from(&args(&["--json", "plan.json", "--strict"]));
        assert!(result.json);
        assert!(result.strict);
        assert_eq!(result.plan_path.as_deref(), Some("plan.json"));
    }

    #[test]
    fn test_parse_args_help() {
        assert!(parse_args_from(&args(&["--help"])).help);
        assert!(parse_args_from(&args(&["-h"])).help);
    }

    #[test]
    fn test_parse_args_at() {
        let result = parse_args_from(&args(&["--at", "TUE", "07:30", "plan.json"]));
        assert_eq!(result.at, Some(("TUE".to_string(), "07:30".to_string())));
        assert_eq!(result.plan_path.as_deref(), Some("plan.json"));
    }

    #[test]
    fn test_parse_args_at_incomplete_shows_help() {
        let result = parse_args_from(&args(&["plan.json", "--at", "TUE"]));
        assert!(result.help);
        assert!(result.at.is_none());
    }

    #[test]
    fn test_parse_args_first_positional_wins() {
        let result = parse_args_from(&args(&["a.json", "b.json"]));
        assert_eq!(result.plan_path.as_deref(), Some("a.json"));
    }

    #[test]
    fn test_parse_args_unknown_flag_ignored() {
        let result = parse_args_from(&args(&["--verbose", "plan.json"]));
        assert_eq!(result.plan_path.as_deref(), Some("plan.json"));
    }
}
