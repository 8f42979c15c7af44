use std::borrow::Cow;

use error_stack::Report;
use thiserror::Error;
use validator::ValidateError;

#[derive(Debug, Error)]
#[error("Invalid given data occurred")]
pub struct Wrapper;

/// Flattens a [`ValidateError`] tree into an [`error_stack`] report,
/// one printable attachment per `field.path: message` pair.
pub trait IntoValidatorReport<T> {
    fn into_validator_report(self) -> error_stack::Result<T, Wrapper>;
}

impl<T> IntoValidatorReport<T> for Result<T, ValidateError> {
    fn into_validator_report(self) -> error_stack::Result<T, Wrapper> {
        self.map_err(|v| {
            fn read_errors<'a>(
                err: &'a ValidateError,
                fields_queue: &mut Vec<Cow<'a, str>>,
                mut report: Report<Wrapper>,
            ) -> Report<Wrapper> {
                match err {
                    ValidateError::Fields(fields) => {
                        for (field, data) in fields {
                            fields_queue.push(Cow::Borrowed(field));
                            report = read_errors(data, fields_queue, report);
                            fields_queue.pop();
                        }
                        report
                    }
                    ValidateError::Messages(messages) => {
                        let field_str = fields_queue.join(".");
                        for message in messages {
                            report = report.attach_printable(format!("{field_str}: {message}"));
                        }
                        report
                    }
                }
            }

            let mut queue = Vec::new();
            let report = Report::new(Wrapper);
            read_errors(&v, &mut queue, report)
        })
    }
}
