use std::env;

use chrono::NaiveDate;

pub const USAGE: &str = "Usage: monthcal [--month YYYY-MM] [--theme NAME] [--sample]";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub sample: bool,
    pub month: Option<NaiveDate>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Run(CliOptions),
    Help,
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(env::args().skip(1))
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliMode, String> {
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => options.sample = true,
            "--month" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--month requires a value (YYYY-MM)".to_string())?;
                options.month = Some(parse_month(&value)?);
            }
            "--theme" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--theme requires a theme name".to_string())?;
                options.theme = Some(value);
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(CliMode::Run(options))
}

fn parse_month(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
        .map_err(|_| format!("Invalid month '{}'. Use YYYY-MM.", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_runs_with_defaults() {
        assert_eq!(parse_args(args(&[])), Ok(CliMode::Run(CliOptions::default())));
    }

    #[test]
    fn month_and_theme_are_parsed() {
        let mode = parse_args(args(&["--month", "2025-12", "--theme", "nord", "--sample"])).unwrap();
        assert_eq!(
            mode,
            CliMode::Run(CliOptions {
                sample: true,
                month: NaiveDate::from_ymd_opt(2025, 12, 1),
                theme: Some("nord".to_string()),
            })
        );
    }

    #[test]
    fn bad_month_is_rejected() {
        assert!(parse_args(args(&["--month", "2025-13"])).is_err());
        assert!(parse_args(args(&["--month"])).is_err());
    }

    #[test]
    fn help_flag_short_circuits() {
        assert_eq!(parse_args(args(&["--help", "--bogus"])), Ok(CliMode::Help));
    }

    #[test]
    fn unknown_argument_is_error() {
        assert_eq!(
            parse_args(args(&["--agenda"])),
            Err("Unknown argument: --agenda".to_string())
        );
    }
}
