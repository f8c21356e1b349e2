use std::error::Error;
use std::ffi::OsString;

use itertools::Itertools;

fn main() -> Result<(), Box<dyn Error>> {
    let arguments: Vec<OsString> = std::env::args_os().skip(1).collect();
    if arguments.is_empty() {
        eprintln!("Not enough arguments. Usage: recode [files]");
        return Err(std::io::Error::from(std::io::ErrorKind::InvalidInput).into());
    }
    for argument in &arguments {
        print!("{}: ", argument.to_string_lossy());
        match std::fs::read(argument) {
            Ok(bytes) => report(&bytes),
            Err(error) => println!("{error}"),
        }
    }
    Ok(())
}

enum DetectedForm {
    Utf8,
    Utf16,
    Utf32,
}

fn detect(bytes: &[u8]) -> DetectedForm {
    if bytes.len() >= 4
        && (bytes[..4] == [0x00, 0x00, 0xFE, 0xFF] || bytes[..4] == [0xFF, 0xFE, 0x00, 0x00])
    {
        return DetectedForm::Utf32;
    }
    if bytes.len() >= 2 && (bytes[..2] == [0xFE, 0xFF] || bytes[..2] == [0xFF, 0xFE]) {
        return DetectedForm::Utf16;
    }
    DetectedForm::Utf8
}

fn report(bytes: &[u8]) {
    // Units are packed big-endian; the converter consults the marker itself
    // and swaps when the buffer turns out to be little-endian.
    let outcome = match detect(bytes) {
        DetectedForm::Utf8 => {
            recode::utf8_to_utf32(bytes, false).map(|points| ("UTF-8", points.len()))
        }
        DetectedForm::Utf16 => {
            let units: Vec<u16> = bytes
                .iter()
                .tuples()
                .map(|(&a, &b)| u16::from_be_bytes([a, b]))
                .collect();
            recode::utf16_to_utf32(&units, false).map(|points| ("UTF-16", points.len()))
        }
        DetectedForm::Utf32 => {
            let units: Vec<u32> = bytes
                .iter()
                .tuples()
                .map(|(&a, &b, &c, &d)| u32::from_be_bytes([a, b, c, d]))
                .collect();
            recode::utf32_to_utf8(&units, false).map(|_| ("UTF-32", units.len()))
        }
    };
    match outcome {
        Ok((form, count)) => println!("{form} text, {count} code points"),
        Err(error) => println!("{error}"),
    }
}
