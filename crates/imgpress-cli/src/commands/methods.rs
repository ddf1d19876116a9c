use anyhow::Result;

use crate::summary::print_methods;

pub fn run() -> Result<()> {
    print_methods();
    Ok(())
}
