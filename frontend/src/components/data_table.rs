use crate::helpers::format_count;
use outreach_common::model::table::Table;
use yew::prelude::*;

/// Renders an imported table. Rows are aligned to the header list, so ragged
/// rows show empty cells instead of shifting columns. With `max_rows`, only
/// the first rows are shown followed by a count of the rest.
pub fn data_table(table: &Table, max_rows: Option<usize>) -> Html {
    let shown = max_rows.map_or(table.len(), |max| max.min(table.len()));
    let hidden = table.len() - shown;

    html! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        { for table.headers.iter().map(|h| html! { <th>{ h.clone() }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for (0..shown).map(|row| html! {
                        <tr>
                            { for table.display_row(row).into_iter().map(|cell| html! { <td>{ cell.to_string() }</td> }) }
                        </tr>
                    }) }
                </tbody>
            </table>
            if hidden > 0 {
                <p class="muted">{ format!("... and {} more rows", format_count(hidden)) }</p>
            }
        </div>
    }
}
