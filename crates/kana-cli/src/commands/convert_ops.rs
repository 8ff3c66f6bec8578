use std::fmt;
use std::io::{Read, Write};

use kana_core::{hiragana_to_katakana, transliterate, Script};

use super::CliError;

/// What a conversion command does to its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Romaji(Script),
    HiraganaToKatakana,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Romaji(script) => fmt::Display::fmt(script, f),
            Conversion::HiraganaToKatakana => fmt::Display::fmt(&Script::Katakana, f),
        }
    }
}

/// Convert `text`, rejecting empty input the way an editor rejects an empty selection.
pub fn convert_text(text: &str, conversion: Conversion) -> Result<String, CliError> {
    if text.is_empty() {
        return Err(CliError::NoText);
    }
    Ok(match conversion {
        Conversion::Romaji(script) => transliterate(text, script),
        Conversion::HiraganaToKatakana => hiragana_to_katakana(text),
    })
}

/// Resolve the command input: the positional argument, or all of `stdin`.
pub fn read_input(text: Option<String>, stdin: impl Read) -> Result<(String, bool), CliError> {
    match text {
        Some(text) => Ok((text, false)),
        None => {
            let mut buf = String::new();
            let mut stdin = stdin;
            stdin.read_to_string(&mut buf).map_err(CliError::Stdin)?;
            Ok((buf, true))
        }
    }
}

/// Run one conversion command.
///
/// Stdin input is echoed back without an extra newline so line structure is
/// kept; argument input gets one. `notice` writes `Converted to <script>` to
/// `err` on success.
pub fn run(
    text: Option<String>,
    conversion: Conversion,
    notice: bool,
    stdin: impl Read,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let (input, from_stdin) = read_input(text, stdin)?;
    let converted = convert_text(&input, conversion)?;
    if from_stdin {
        write!(out, "{converted}").map_err(CliError::Write)?;
    } else {
        writeln!(out, "{converted}").map_err(CliError::Write)?;
    }
    if notice {
        writeln!(err, "Converted to {conversion}").map_err(CliError::Write)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn run_capture(
        text: Option<&str>,
        stdin: &str,
        conversion: Conversion,
        notice: bool,
    ) -> Result<(String, String), CliError> {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(
            text.map(str::to_string),
            conversion,
            notice,
            stdin.as_bytes(),
            &mut out,
            &mut err,
        )?;
        Ok((
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        ))
    }

    #[test]
    fn hiragana_from_argument() {
        let (out, err) = run_capture(
            Some("watashi-ga keeki-wo taberu"),
            "",
            Conversion::Romaji(Script::Hiragana),
            true,
        )
        .unwrap();
        assert_eq!(out, "わたしが けえきを たべる\n");
        assert_eq!(err, "Converted to hiragana\n");
    }

    #[test]
    fn katakana_from_stdin_keeps_lines() {
        let (out, err) = run_capture(
            None,
            "sushi\nramen\n",
            Conversion::Romaji(Script::Katakana),
            false,
        )
        .unwrap();
        assert_eq!(out, "スシ\nラメン\n");
        assert_eq!(err, "");
    }

    #[test]
    fn hiragana_to_katakana_command() {
        let (out, err) =
            run_capture(Some("あいうえお"), "", Conversion::HiraganaToKatakana, true).unwrap();
        assert_eq!(out, "アイウエオ\n");
        assert_eq!(err, "Converted to katakana\n");
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = run_capture(Some(""), "", Conversion::Romaji(Script::Hiragana), true)
            .unwrap_err();
        assert!(matches!(err, CliError::NoText));
        let err = run_capture(None, "", Conversion::HiraganaToKatakana, true).unwrap_err();
        assert_eq!(err.to_string(), "No text to convert");
    }

    #[test]
    fn stdin_read_failure() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "closed"))
            }
        }
        let err = read_input(None, Broken).unwrap_err();
        assert!(matches!(err, CliError::Stdin(_)));
    }

    #[test]
    fn invalid_utf8_stdin_is_an_error() {
        let err = read_input(None, &[0xff, 0xfe][..]).unwrap_err();
        assert!(matches!(err, CliError::Stdin(_)));
    }
}
