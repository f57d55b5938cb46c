use error_stack::{Context, Report};

// Figment's error type buries the key and source of a failure inside
// its metadata. Pull those out as printable attachments so a missing
// environment variable is named in the fatal startup report.
pub trait DescribeFigmentError<T: Context> {
    fn describe_figment_error(self, err: figment::Error) -> Report<T>;
}

impl<T: Context> DescribeFigmentError<T> for Report<T> {
    fn describe_figment_error(self, e: figment::Error) -> Report<T> {
        let mut this = self.attach_printable(format!("{}", e.kind));

        if let (Some(profile), Some(md)) = (&e.profile, &e.metadata) {
            if !e.path.is_empty() {
                let key = md.interpolate(profile, &e.path);
                this = this.attach_printable(format!("for key {key:?}"));
            }
        }

        if let Some(md) = &e.metadata {
            if let Some(source) = &md.source {
                this = this.attach_printable(format!("in {} {}", source, md.name));
            } else {
                this = this.attach_printable(format!("in {}", md.name));
            }
        }

        this
    }
}
