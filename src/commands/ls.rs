use crate::api::ProfileApi;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::{OutputMode, status_label};

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let client = ctx.client()?;
    let profiles = client.list_profiles().await?;

    if ctx.output.mode() == OutputMode::Text {
        if profiles.is_empty() {
            println!("0 profiles");
            return Ok(());
        }

        for (index, profile) in profiles.iter().enumerate() {
            println!(
                "{}. {} [{}] (id: {})",
                index + 1,
                profile.name,
                status_label(profile.active),
                profile.id
            );
        }

        let active = profiles.iter().filter(|profile| profile.active).count();
        println!();
        println!("{} profiles, {active} active", profiles.len());
        return Ok(());
    }

    let text = format!("{} profiles", profiles.len());
    ctx.output.emit(&text, &profiles)
}
