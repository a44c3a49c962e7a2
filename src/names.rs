//! Resolving typed names to person ids.

use std::io::{self, BufRead, Write};

use crate::dataset::Dataset;

/// Returns the person id for `name`, asking on `output`/`input` which one
/// was meant when several people share the name.
///
/// `None` when nobody has the name or the chosen id is not one of the
/// candidates.
pub fn person_id_for_name<R: BufRead, W: Write>(
    dataset: &Dataset,
    name: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    let person_ids = dataset.person_ids_for_name(name);
    match person_ids.as_slice() {
        [] => Ok(None),
        [person_id] => Ok(Some((*person_id).to_string())),
        candidates => {
            writeln!(output, "Which '{name}'?")?;
            for person_id in candidates {
                if let Some(person) = dataset.person(person_id) {
                    let birth = person.birth.map(|year| year.to_string()).unwrap_or_default();
                    writeln!(output, "ID: {person_id}, Name: {}, Birth: {birth}", person.name)?;
                }
            }
            write!(output, "Intended Person ID: ")?;
            output.flush()?;

            let mut line = String::new();
            input.read_line(&mut line)?;
            let chosen = line.trim();
            Ok(candidates
                .iter()
                .find(|candidate| **candidate == chosen)
                .map(|candidate| (*candidate).to_string()))
        }
    }
}

/// Prints `Name: ` and reads one line.
pub fn prompt_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "Name: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
