// encode.rs — Show the on-disk encoding of a workspace name.

use demokit_workspace::encode_name;

pub fn execute(name: &str) -> anyhow::Result<()> {
    println!("{}", encode_name(name));
    Ok(())
}
