use anyhow::{Result, bail};
use birthday_calc::{age, validate};
use chrono::Local;

const USAGE: &str = "usage: birthday-calc <day> <month> <year> [--json]";

fn main() -> Result<()> {
    let mut json = false;
    let mut fields: Vec<String> = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => fields.push(arg),
        }
    }

    if fields.len() > 3 {
        bail!("too many arguments\n{USAGE}");
    }
    // Absent arguments become empty fields so they report as "required".
    fields.resize(3, String::new());

    let today = Local::now().date_naive();

    match validate::validate(&fields[0], &fields[1], &fields[2], today) {
        Ok(birth) => {
            let result = age::compute_age(birth, today);
            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                println!("{}", age::age_string(&result));
            }
            Ok(())
        }
        Err(errors) => {
            for (name, err) in [
                ("day", errors.day),
                ("month", errors.month),
                ("year", errors.year),
            ] {
                if let Some(e) = err {
                    eprintln!("{name}: {e}");
                }
            }
            if let Some(e) = errors.form {
                eprintln!("{e}");
            }
            bail!("invalid date of birth");
        }
    }
}
