// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reads decimal literals line by line from a text file and adds a fixed
//! addend to each valid one.
//!
//! Usage: `linesum [input-file] [addend]`, defaulting to `input.txt` and
//! `-123.456`. Invalid lines are reported as such; no arithmetic is
//! attempted on them.

use decimal_text::{add_decimal_strings, is_valid_decimal_literal};
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_ADDEND: &str = "-123.456";

/// Evaluates every line of `input`, writing one report per line.
fn run<R: BufRead, W: Write>(input: R, mut out: W, addend: &str) -> io::Result<()> {
    if !is_valid_decimal_literal(addend) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid addend: {:?}", addend),
        ));
    }

    for line in input.lines() {
        let line = line?;
        if is_valid_decimal_literal(&line) {
            writeln!(out, "Valid: {}", line)?;
            // the addend was validated above, the line just now
            let result = add_decimal_strings(&line, addend)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(out, "{} + ({}) = {}\n", line, addend, result)?;
        } else {
            writeln!(out, "Invalid: {}\n", line)?;
        }
    }

    Ok(())
}

fn main() {
    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let addend = args.next().unwrap_or_else(|| DEFAULT_ADDEND.to_string());

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("error opening {}: {}", path, err);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    if let Err(err) = run(BufReader::new(file), stdout.lock(), &addend) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_run(input: &str, addend: &str, expected: &str) {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, addend).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_run() {
        assert_run(
            "100\nabc\n12.3.4\n",
            "-123.456",
            "Valid: 100\n\
             100 + (-123.456) = -23.456\n\n\
             Invalid: abc\n\n\
             Invalid: 12.3.4\n\n",
        );
    }

    #[test]
    fn test_run_custom_addend() {
        assert_run(
            "0.9\n",
            "0.1",
            "Valid: 0.9\n0.9 + (0.1) = 1\n\n",
        );
    }

    #[test]
    fn test_run_invalid_addend() {
        let mut out = Vec::new();
        let err = run("1\n".as_bytes(), &mut out, "1.2.3").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }
}
