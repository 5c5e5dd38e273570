use crate::navigation::SIDEBAR;

pub fn handle() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&SIDEBAR)?);
    Ok(())
}
