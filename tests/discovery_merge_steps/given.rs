//! Given steps for auto-discovery merge BDD scenarios.

use super::world::{
    DiscoveryWorld, artifact_entry, code_repo_entry, metadata, run_async, single_entry_request,
};
use autodiscovery::discovery::{domain::DiscoveryCategory, services::SaveDiscoveryRequest};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a submission for application "{application}" with a "{tool}" code repository"#)]
fn submission_with_code_repo(world: &mut DiscoveryWorld, application: String, tool: String) {
    world.pending.push(single_entry_request(
        &application,
        DiscoveryCategory::CodeRepo,
        code_repo_entry(&tool),
    ));
}

#[given(r#"a submission for application "{application}" with an "{tool}" artifact"#)]
fn submission_with_artifact(world: &mut DiscoveryWorld, application: String, tool: String) {
    world.pending.push(single_entry_request(
        &application,
        DiscoveryCategory::Artifact,
        artifact_entry(&tool),
    ));
}

#[given(r#"a saved record for application "{application}" with a code repository and an artifact"#)]
fn saved_record_with_code_repo_and_artifact(
    world: &mut DiscoveryWorld,
    application: String,
) -> Result<(), eyre::Report> {
    let request = SaveDiscoveryRequest::new(metadata(&application))
        .with_entries(DiscoveryCategory::CodeRepo, [code_repo_entry("GitHub")])
        .with_entries(DiscoveryCategory::Artifact, [artifact_entry("Artifactory")]);
    let id = run_async(world.service.save(request)).wrap_err("save initial record")?;
    world.saved_ids.push(id);
    Ok(())
}

#[given(r#"a saved record for application "{application}" titled "{title}""#)]
fn saved_record_titled(
    world: &mut DiscoveryWorld,
    application: String,
    title: String,
) -> Result<(), eyre::Report> {
    let request = SaveDiscoveryRequest::new(metadata(&application).with_title(title))
        .with_entries(DiscoveryCategory::CodeRepo, [code_repo_entry("GitHub")]);
    let id = run_async(world.service.save(request)).wrap_err("save initial record")?;
    world.saved_ids.push(id);
    Ok(())
}
