//! Then steps for auto-discovery merge BDD scenarios.

use super::world::{DiscoveryWorld, run_async};
use autodiscovery::discovery::domain::{DiscoveryCategory, DiscoveryRecord};
use rstest_bdd_macros::then;
use std::collections::HashSet;

fn stored_artifact(record: &DiscoveryRecord) -> Result<(String, String), eyre::Report> {
    let entry = record
        .categories()
        .get(DiscoveryCategory::Artifact)
        .first()
        .ok_or_else(|| eyre::eyre!("stored record has no artifact entries"))?;
    Ok((
        entry.status().as_str().to_owned(),
        entry.description().to_owned(),
    ))
}

#[then("the store holds {count:usize} records")]
fn store_holds(world: &mut DiscoveryWorld, count: usize) -> Result<(), eyre::Report> {
    let total =
        run_async(world.service.count()).map_err(|err| eyre::eyre!("count failed: {err}"))?;
    if total != u64::try_from(count)? {
        return Err(eyre::eyre!("expected {count} records, found {total}"));
    }
    Ok(())
}

#[then("every saved identifier is distinct")]
fn identifiers_distinct(world: &DiscoveryWorld) -> Result<(), eyre::Report> {
    let unique: HashSet<_> = world.saved_ids.iter().collect();
    if unique.len() != world.saved_ids.len() {
        return Err(eyre::eyre!("duplicate identifiers in {:?}", world.saved_ids));
    }
    Ok(())
}

#[then(r#"the stored artifact status is "{status}""#)]
fn artifact_status_is(world: &DiscoveryWorld, status: String) -> Result<(), eyre::Report> {
    let (stored_status, _) = stored_artifact(&world.last_record()?)?;
    if stored_status != status {
        return Err(eyre::eyre!("expected status {status}, found {stored_status}"));
    }
    Ok(())
}

#[then(r#"the stored artifact description is "{description}""#)]
fn artifact_description_is(
    world: &DiscoveryWorld,
    description: String,
) -> Result<(), eyre::Report> {
    let (_, stored_description) = stored_artifact(&world.last_record()?)?;
    if stored_description != description {
        return Err(eyre::eyre!(
            "expected description '{description}', found '{stored_description}'"
        ));
    }
    Ok(())
}

#[then("the stored record has {count:usize} code repository entries")]
fn code_repo_count(world: &DiscoveryWorld, count: usize) -> Result<(), eyre::Report> {
    let record = world.last_record()?;
    let found = record.categories().get(DiscoveryCategory::CodeRepo).len();
    if found != count {
        return Err(eyre::eyre!("expected {count} code repositories, found {found}"));
    }
    Ok(())
}

#[then(r#"the stored title is "{title}""#)]
fn stored_title_is(world: &DiscoveryWorld, title: String) -> Result<(), eyre::Report> {
    let record = world.last_record()?;
    if record.metadata().title() != title {
        return Err(eyre::eyre!(
            "expected title '{title}', found '{}'",
            record.metadata().title()
        ));
    }
    Ok(())
}

#[then(r#"saving fails with message "{message}""#)]
fn saving_fails_with(world: &DiscoveryWorld, message: String) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the save to fail"))?;
    if err.to_string() != message {
        return Err(eyre::eyre!("expected '{message}', got '{err}'"));
    }
    Ok(())
}
