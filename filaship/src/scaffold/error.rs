use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ProjectNameError {
    #[snafu(display("Project name must be at least {min_length} characters."))]
    TooShort { min_length: usize },

    #[snafu(display(
        "Project name can only contain lowercase letters, numbers, hyphens and underscores, \
         found '{character}'."
    ))]
    InvalidCharacter { character: char },
}
