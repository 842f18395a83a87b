//! Terminal front-end: prompts for the three fields, runs the core update
//! loop, and renders the settled status line.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use leadform_core::{update, Field, FormState, Msg, SubmissionStatus};

use crate::effects::EffectRunner;

pub fn run() -> io::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut state = FormState::new();

    println!("🎯 AI Lead Generation System");
    loop {
        let fields = [
            (Field::JobTitle, "Job Title / Role *"),
            (Field::City, "Target City *"),
            (Field::Email, "Email (optional)"),
        ];
        let mut eof = false;
        for (field, label) in fields {
            match read_field(&mut input, label)? {
                Some(value) => {
                    let (next, _effects) = update(state, Msg::FieldEdited { field, value });
                    state = next;
                }
                None => {
                    eof = true;
                    break;
                }
            }
        }
        if eof {
            break;
        }

        let (next, effects) = update(state, Msg::SubmitClicked);
        state = next;
        runner.run(effects);

        if state.submission() == SubmissionStatus::InFlight {
            println!("{}", state.view().submit_label);
            // Block until the engine settles this attempt.
            match msg_rx.recv() {
                Ok(msg) => {
                    let (next, _effects) = update(state, msg);
                    state = next;
                }
                Err(_) => break,
            }
        }

        if let Some(status) = state.view().status {
            println!("{}", status.render());
        }

        if !prompt_yes_no(&mut input, "Submit another lead? [y/N] ")? {
            break;
        }
    }
    Ok(())
}

/// Reads one line for a field. Returns `None` on end of input.
fn read_field(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt_yes_no(input: &mut impl BufRead, question: &str) -> io::Result<bool> {
    print!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}
