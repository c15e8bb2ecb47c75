use crate::models::container_client::ImageDescriptor;

const SHORT_IMAGE_ID_LENGTH: usize = 12;

/// Splits `repo:tag` at the last `:`. A trailing segment that contains `/` is a
/// registry port, not a tag, so the whole string is the repository.
pub fn split_full_tag(full_tag: &str) -> (&str, &str) {
    match full_tag.rfind(':') {
        Some(index) if !full_tag[index + 1..].contains('/') => {
            (&full_tag[..index], &full_tag[index + 1..])
        }
        _ => (full_tag, ""),
    }
}

pub fn repository_name(repository: &str) -> &str {
    repository
        .rsplit_once('/')
        .map(|(_, name)| name)
        .unwrap_or(repository)
}

pub fn short_image_id(id: &str) -> &str {
    let id = id.strip_prefix("sha256:").unwrap_or(id);
    match id.char_indices().nth(SHORT_IMAGE_ID_LENGTH) {
        Some((index, _)) => &id[..index],
        None => id,
    }
}

/// Substitutes `{fullTag}`, `{tag}`, `{repository}`, `{repositoryName}` and
/// `{shortImageId}` in `template`.
pub fn format_image_label(full_tag: &str, image: &ImageDescriptor, template: &str) -> String {
    let (repository, tag) = split_full_tag(full_tag);

    template
        .replace("{fullTag}", full_tag)
        .replace("{tag}", tag)
        .replace("{repositoryName}", repository_name(repository))
        .replace("{repository}", repository)
        .replace("{shortImageId}", short_image_id(&image.id))
}
