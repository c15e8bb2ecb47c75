use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::models::command::TagSuggestion;
use crate::usecases::image_label::split_full_tag;

const DEFAULT_TAG: &str = "latest";

static SAFE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9.-]*(|alpha|beta|latest|edge|v|version)?[0-9.-]*$")
        .expect("safe tag pattern is valid")
});

static KNOWN_REGISTRIES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        // username/path/
        ("dockerhub-namespace", r"^[^.:]+/[^.:]+/$"),
        ("dockerhub-dockerio", r"^docker.io.*/"),
        ("gitlab", r"gitlab.*/"),
        ("ACR", r"azurecr\.io.*/"),
        ("GCR", r"gcr\.io.*/"),
        ("ECR", r"\.ecr\..*/"),
        ("localhost", r"localhost:.*/"),
        // a port usually means a private registry
        ("privateWithPort", r":[0-9]+/"),
        ("other", r"/"),
        ("none", r"."),
    ]
    .into_iter()
    .map(|(kind, pattern)| {
        (
            kind,
            Regex::new(pattern).expect("registry pattern is valid"),
        )
    })
    .collect()
});

/// Which point of the tag operation a property set describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPhase {
    Before,
    After,
    Unspecified,
}

impl TagPhase {
    fn suffix(&self) -> &'static str {
        match self {
            TagPhase::Before => ".before",
            TagPhase::After => ".after",
            TagPhase::Unspecified => "",
        }
    }
}

pub fn registry_type(repository: &str) -> &'static str {
    KNOWN_REGISTRIES
        .iter()
        .find(|(_, pattern)| pattern.is_match(repository))
        .map(|(kind, _)| *kind)
        .unwrap_or("none")
}

/// Usage properties describing an image name, keyed `<property><phase suffix>`.
pub fn image_tagging_properties(
    full_image_name: &str,
    default_registry_path: &str,
    phase: TagPhase,
) -> BTreeMap<String, String> {
    let (repository, tag) = split_full_tag(full_image_name);
    let mut properties = BTreeMap::new();

    if SAFE_TAG.is_match(tag) {
        properties.insert("safeTag", tag.to_string());
    }
    properties.insert("hasTag", (!tag.is_empty()).to_string());
    properties.insert("numSlashes", repository.matches('/').count().to_string());
    properties.insert(
        "isDefaultRegistryPathInName",
        repository
            .starts_with(&format!("{}/", default_registry_path))
            .to_string(),
    );
    properties.insert(
        "isDefaultRegistryPathSet",
        (!default_registry_path.is_empty()).to_string(),
    );
    properties.insert("registryType", registry_type(repository).to_string());

    properties
        .into_iter()
        .map(|(name, value)| (format!("{}{}", name, phase.suffix()), value))
        .collect()
}

/// Splits the name typed into the tag prompt into repository and tag.
/// A name without a tag is tagged `latest`.
pub fn parse_tag_input(name: &str) -> (String, String) {
    let name = name.trim();
    match split_full_tag(name) {
        (repository, tag) if !repository.is_empty() && !tag.is_empty() => {
            (repository.to_string(), tag.to_string())
        }
        _ => (name.to_string(), DEFAULT_TAG.to_string()),
    }
}

/// Prefills the tag prompt, prefixing the default registry path when the image
/// has no registry yet.
pub fn suggest_tag(image_name: &str, default_registry_path: &str) -> TagSuggestion {
    let registry_length = image_name.chars().position(|c| c == '/');

    match registry_length {
        None if !default_registry_path.is_empty() => TagSuggestion {
            value: format!("{}/{}", default_registry_path, image_name),
            selection: Some((0, default_registry_path.chars().count() + 1)),
        },
        None => TagSuggestion {
            value: image_name.to_string(),
            selection: None,
        },
        Some(length) => TagSuggestion {
            value: image_name.to_string(),
            selection: Some((0, length + 1)),
        },
    }
}
