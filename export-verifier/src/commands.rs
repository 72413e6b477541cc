//! Implementation of the verifier export

use tracing::{debug, info};

use crate::{
    cli::ExportArgs,
    errors::ScriptError,
    template::{render_verifier, TemplateConfig},
    utils::{read_file, write_file, ArtifactPaths},
    vkey::extract_verifying_key,
};

/// Export the verifier contract for a single target.
///
/// The output is only opened once the verifier has been fully rendered, so a
/// failed export never leaves a partial contract behind.
pub fn export_verifier(args: ExportArgs) -> Result<(), ScriptError> {
    let paths = ArtifactPaths::new(&args.root, &args.target);
    info!(target_name = %args.target, num_public_inputs = args.num_public_inputs, "exporting verifier");

    debug!(path = %paths.source.display(), "reading generated verifier");
    let source = read_file(&paths.source)?;
    let vkey = extract_verifying_key(&source, args.num_public_inputs)?;
    debug!(num_lines = vkey.lines().count(), "extracted verifying key");

    debug!(path = %paths.template.display(), "reading verifier template");
    let template = read_file(&paths.template)?;
    let verifier = render_verifier(&template, &vkey, &TemplateConfig::default());

    if args.stdout {
        print!("{verifier}");
        return Ok(());
    }

    write_file(&paths.output, &verifier)?;
    info!(path = %paths.output.display(), "wrote verifier");

    Ok(())
}
