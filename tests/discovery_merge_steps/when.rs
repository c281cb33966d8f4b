//! When steps for auto-discovery merge BDD scenarios.

use super::world::{DiscoveryWorld, artifact_entry, metadata, run_async};
use autodiscovery::discovery::{
    domain::{DiscoveryCategory, DiscoveryStatus},
    services::SaveDiscoveryRequest,
};
use rstest_bdd_macros::when;

#[when("every submission is saved without an identifier")]
fn save_every_submission(world: &mut DiscoveryWorld) -> Result<(), eyre::Report> {
    for request in std::mem::take(&mut world.pending) {
        let id = run_async(world.service.save(request))
            .map_err(|err| eyre::eyre!("unexpected save failure: {err}"))?;
        world.saved_ids.push(id);
    }
    Ok(())
}

#[when(
    r#"the artifact is resubmitted with status "{status}" and description "{description}" without code repositories"#
)]
fn resubmit_artifact(
    world: &mut DiscoveryWorld,
    status: String,
    description: String,
) -> Result<(), eyre::Report> {
    let id = world.last_id()?;
    let parsed_status = DiscoveryStatus::try_from(status.as_str())?;
    let request = SaveDiscoveryRequest::new(metadata("ignored on update"))
        .with_discovery_id(id.to_hex())
        .with_entries(DiscoveryCategory::CodeRepo, Vec::new())
        .with_entries(
            DiscoveryCategory::Artifact,
            [artifact_entry("Artifactory")
                .with_status(parsed_status)
                .with_description(description)],
        );
    let saved = run_async(world.service.save(request))
        .map_err(|err| eyre::eyre!("resubmission failed: {err}"))?;
    if saved != id {
        return Err(eyre::eyre!("expected identifier {id}, got {saved}"));
    }
    Ok(())
}

#[when(r#"the record is resubmitted titled "{title}""#)]
fn resubmit_titled(world: &mut DiscoveryWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.last_id()?;
    let request = SaveDiscoveryRequest::new(metadata("DummyApp").with_title(title))
        .with_discovery_id(id.to_hex());
    run_async(world.service.save(request))
        .map_err(|err| eyre::eyre!("resubmission failed: {err}"))?;
    Ok(())
}

#[when(r#"a submission is saved with identifier "{raw}""#)]
fn save_with_identifier(world: &mut DiscoveryWorld, raw: String) {
    let request = SaveDiscoveryRequest::new(metadata("DummyApp")).with_discovery_id(raw);
    match run_async(world.service.save(request)) {
        Ok(id) => world.saved_ids.push(id),
        Err(err) => world.last_error = Some(err),
    }
}
