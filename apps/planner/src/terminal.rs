//! Line-oriented prompting for the interactive form.

use std::io::{self, BufRead, Write};

use crate::form::ProfileInput;

/// Asks for one field. An empty answer keeps `current`.
pub fn prompt_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> io::Result<String> {
    if current.is_empty() {
        write!(output, "{label}: ")?;
    } else {
        write!(output, "{label} [{current}]: ")?;
    }
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    let answer = line.trim_end_matches(['\r', '\n']);
    if answer.trim().is_empty() {
        Ok(current.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Walks through every form field, using the existing values as defaults.
pub fn prompt_profile<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    current: &ProfileInput,
) -> io::Result<ProfileInput> {
    Ok(ProfileInput {
        degree: prompt_field(input, output, "Current Degree / Major", &current.degree)?,
        skills: prompt_field(
            input,
            output,
            "Current Skills (comma separated)",
            &current.skills,
        )?,
        target_role: prompt_field(input, output, "Target Role", &current.target_role)?,
        daily_hours: prompt_field(input, output, "Daily Study Hours", &current.daily_hours)?,
    })
}

/// Yes/no question; anything but `y`/`yes` counts as no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    write!(output, "{question} ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
