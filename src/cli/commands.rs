// CLI command implementations
use std::io::{self, Write};
use std::path::Path;

use e7song::{E7File, Song};

use super::config::{Commands, Config};
use super::{CliError, CliResult, OutputFormatter};

/// Run the command selected in `config`
pub fn execute(config: &Config) -> CliResult<()> {
    let formatter = OutputFormatter::new(config.format, config.quiet);
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match &config.command {
        Commands::Show { file } => command_show(file, &formatter, &mut writer),
        Commands::Save { file, output } => command_save(file, output, &formatter),
        Commands::Render { snapshot } => command_render(snapshot, &formatter, &mut writer),
        Commands::Fields { file } => command_fields(file, &formatter, &mut writer),
    }
}

fn open(file: &Path) -> CliResult<E7File> {
    if !file.exists() {
        return Err(CliError::FileNotFound(file.to_path_buf()));
    }
    Ok(E7File::new(file))
}

/// Decode a container, failing on the first decode error
fn decode(file: &Path) -> CliResult<Song> {
    Ok(open(file)?.try_song()?)
}

/// Print a decoded song
fn command_show(file: &Path, formatter: &OutputFormatter, writer: &mut impl Write) -> CliResult<()> {
    let song = decode(file)?;
    formatter.output_song(&song, writer)
}

/// Write a JSON snapshot of a decoded song
fn command_save(file: &Path, output: &Path, formatter: &OutputFormatter) -> CliResult<()> {
    let song = decode(file)?;
    song.save(output)?;
    formatter.print_success(&format!(
        "Saved '{}' ({} verses) to {}",
        song.title,
        song.verses.len(),
        output.display()
    ));
    Ok(())
}

/// Print a song from a snapshot
fn command_render(snapshot: &Path, formatter: &OutputFormatter, writer: &mut impl Write) -> CliResult<()> {
    if !snapshot.exists() {
        return Err(CliError::FileNotFound(snapshot.to_path_buf()));
    }
    let song = Song::load(snapshot)?;
    formatter.output_song(&song, writer)
}

/// Print the top-level fields of a container
fn command_fields(file: &Path, formatter: &OutputFormatter, writer: &mut impl Write) -> CliResult<()> {
    let fields = open(file)?.try_fields()?;
    if fields.is_empty() {
        formatter.print_info("No fields found");
        return Ok(());
    }
    formatter.output_fields(&fields, writer)
}
