//! Declarative helper for implementing [`Operation`](crate::Operation)

/// Implement [`Operation`](crate::Operation) for a command struct.
///
/// ```ignore
/// operation!(MoveTask, verb = "move", noun = "task", description = "Move a task to another column");
/// ```
#[macro_export]
macro_rules! operation {
    (
        $ty:ty,
        verb = $verb:literal,
        noun = $noun:literal,
        description = $description:literal $(,)?
    ) => {
        impl $crate::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $description
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::Operation;

    struct ArchiveColumn;

    operation!(ArchiveColumn, verb = "archive", noun = "column", description = "Hide a column");

    #[test]
    fn test_macro_fills_metadata() {
        assert_eq!(ArchiveColumn.op_string(), "archive column");
        assert_eq!(ArchiveColumn.description(), "Hide a column");
    }
}
