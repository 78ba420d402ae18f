//! Result table rendering.

use crate::ResultFormatter;
use bucket_core::{ResultSet, Schema};
use tracing::{debug, instrument};

/// Cell emitted when a row has no value for a selected column.
const NULL_CELL: &str = "<td>''Null''</td>";

impl ResultFormatter {
    /// Renders a result set as a wiki table.
    ///
    /// Columns appear in schema order, limited to those named in `fields`.
    /// Without a field selection nothing is rendered. Column names are
    /// schema identifiers and are emitted unescaped.
    #[instrument(
        skip(self, schema, fields, result),
        fields(
            schema_columns = schema.len(),
            fields_count = fields.map(|f| f.len()),
            row_count = result.len()
        )
    )]
    pub fn get_result_table(
        &self,
        schema: &Schema,
        fields: Option<&[String]>,
        result: &ResultSet,
    ) -> String {
        let Some(fields) = fields.filter(|fields| !fields.is_empty()) else {
            debug!("No field selection, skipping table");
            return String::new();
        };

        let columns: Vec<_> = schema
            .iter()
            .filter(|(name, _)| fields.iter().any(|field| field.as_str() == *name))
            .collect();
        debug!(column_count = columns.len(), "Resolved table columns");

        let mut output = vec![format!(
            "<table class=\"{}\"><tr>",
            self.config.table_class()
        )];
        for (name, _) in &columns {
            output.push(format!("<th>{}</th>", name));
        }

        for row in result {
            output.push("<tr>".to_string());
            for (name, descriptor) in &columns {
                match row.value(name) {
                    Some(value) => output.push(format!(
                        "<td>{}</td>",
                        self.format_value(value, descriptor.data_type(), *descriptor.repeated())
                    )),
                    None => output.push(NULL_CELL.to_string()),
                }
            }
            output.push("</tr>".to_string());
        }
        output.push("</table>".to_string());

        output.concat()
    }
}
