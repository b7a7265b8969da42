#![no_main]

// Arbitrary block streams and dimensions must never panic, and a successful decode must
// produce exactly width * height * 4 bytes, identical between the sequential and parallel drivers.

use dxt_decode_api::{decode, decode_par, decoded_len, required_input_len, DxtFormat};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct DecodeInput {
    pub format: u8,
    pub width: u8,
    pub height: u8,
    pub data: Vec<u8>,
}

fuzz_target!(|input: DecodeInput| {
    let format = DxtFormat::ALL[input.format as usize % DxtFormat::ALL.len()];
    let (width, height) = (input.width as u32, input.height as u32);

    let result = decode(format, &input.data, width, height);
    let required = required_input_len(format, width, height).unwrap();
    match &result {
        Ok(raster) => {
            assert!(input.data.len() >= required);
            assert_eq!(raster.len(), decoded_len(width, height).unwrap());
        }
        Err(_) => assert!(input.data.len() < required),
    }

    assert_eq!(decode_par(format, &input.data, width, height), result);
});
