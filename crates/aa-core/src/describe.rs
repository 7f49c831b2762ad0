/// Anything with a description the story can rewrite in place.
///
/// Rooms, items, and entities all implement this, so narrative triggers can
/// swap text without caring which kind of object they are touching.
pub trait Describable {
    /// The current description.
    fn description(&self) -> &str;

    /// Overwrite the description.
    fn set_description(&mut self, description: String);
}

/// Replace the description of any describable object.
pub fn update_description<D: Describable + ?Sized>(
    target: &mut D,
    description: impl Into<String>,
) {
    target.set_description(description.into());
}
