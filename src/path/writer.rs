use super::command::SubPath;

/// Render sub-paths as path data.
///
/// Exactly the stored commands are written, each as its command letter then
/// its parameters, with separators only where needed to keep adjacent numbers
/// apart. The output re-parses to the same commands, though it need not match
/// the text originally parsed.
pub fn write_path_data(subpaths: &[SubPath]) -> String {
    let mut out = String::new();
    for cmd in subpaths.iter().flat_map(|sp| sp.commands()) {
        cmd.write_to(&mut out);
    }
    out
}
