use crate::error::CliError;
use crate::util::*;
use argh::FromArgs;
use bytesize::ByteSize;
use dxt_decode_api::{decoded_len, required_input_len, DxtFormat};
use std::{path::PathBuf, time::Instant};
use tracing::{info, warn};

#[derive(FromArgs, Debug)]
/// Decode a headerless BC1/BC2/BC3 block stream into a raw RGBA8 image
#[argh(subcommand, name = "decode")]
pub struct DecodeCmd {
    /// input file containing the compressed blocks
    #[argh(option)]
    pub input: PathBuf,

    /// output file for the raw RGBA8 pixels (row-major, no header)
    #[argh(option)]
    pub output: PathBuf,

    /// block format: bc1, bc2, bc3 (or dxt1, dxt3, dxt5)
    #[argh(option)]
    pub format: DxtFormat,

    /// image width in pixels
    #[argh(option)]
    pub width: u32,

    /// image height in pixels
    #[argh(option)]
    pub height: u32,

    /// decode block rows on all cores
    #[argh(switch)]
    pub parallel: bool,
}

pub fn handle_decode_command(cmd: DecodeCmd) -> Result<(), CliError> {
    let output_len = decoded_len(cmd.width, cmd.height)?;
    let required = required_input_len(cmd.format, cmd.width, cmd.height)?;

    let input_handle = open_read_handle(&cmd.input)?;
    let input_len = get_file_size(&input_handle)?;
    if input_len < required {
        return Err(CliError::TruncatedInput {
            path: cmd.input,
            format: cmd.format,
            required,
            actual: input_len,
        });
    }
    if input_len > required {
        warn!(
            input_len,
            required, "input has trailing bytes past the last block, ignoring them"
        );
    }

    let input_mapping = open_readonly_mmap(&input_handle, input_len)?;
    let input = input_mapping.as_ref().map_or(&[][..], |m| m.as_slice());

    let output_handle = open_write_handle(&cmd.output, output_len)?;
    let mut output_mapping = create_output_mapping(&output_handle, output_len)?;

    let start = Instant::now();
    if let Some(mapping) = output_mapping.as_mut() {
        decode_into(&cmd, input, mapping.as_mut_slice())?;
    }
    let elapsed = start.elapsed();

    let throughput = if elapsed.as_secs_f64() > 0.0 {
        ByteSize((output_len as f64 / elapsed.as_secs_f64()) as u64)
    } else {
        ByteSize(0)
    };

    info!(
        format = cmd.format.name(),
        width = cmd.width,
        height = cmd.height,
        "decode complete"
    );
    println!(
        "Decoded {}x{} {} image: {} in {elapsed:.2?} ({throughput}/s)",
        cmd.width,
        cmd.height,
        cmd.format,
        ByteSize(output_len as u64)
    );

    Ok(())
}

#[cfg(feature = "multithreaded")]
fn decode_into(cmd: &DecodeCmd, input: &[u8], output: &mut [u8]) -> Result<(), CliError> {
    if cmd.parallel {
        dxt_decode_api::decode_par_into(cmd.format, input, cmd.width, cmd.height, output)?;
    } else {
        dxt_decode_api::decode_into(cmd.format, input, cmd.width, cmd.height, output)?;
    }
    Ok(())
}

#[cfg(not(feature = "multithreaded"))]
fn decode_into(cmd: &DecodeCmd, input: &[u8], output: &mut [u8]) -> Result<(), CliError> {
    if cmd.parallel {
        warn!("built without the 'multithreaded' feature, decoding on one thread");
    }
    dxt_decode_api::decode_into(cmd.format, input, cmd.width, cmd.height, output)?;
    Ok(())
}
