use super::delete_modal::DeleteEntityModal;
use super::edit_modal::EditEntityModal;
use crate::shared::icons::icon;
use contracts::domain::a002_commercial_entity::{EntityListConfig, EntityRecord};
use leptos::prelude::*;

/// Dialog currently open on a list page
#[derive(Debug, Clone, PartialEq)]
enum OpenDialog {
    Edit(EntityRecord),
    Delete(EntityRecord),
}

/// Campaign/partner/flyer listing with per-row edit and delete dialogs
#[component]
pub fn EntityList(config: EntityListConfig, records: Vec<EntityRecord>) -> impl IntoView {
    let config = StoredValue::new(config);
    let dialog = RwSignal::new(None::<OpenDialog>);
    let close = Callback::new(move |_| dialog.set(None));

    let headers = config.with_value(|c| {
        c.edit_fields
            .iter()
            .map(|f| view! { <th class="table__header-cell">{f.label.clone()}</th> })
            .collect_view()
    });

    let rows = records
        .into_iter()
        .map(|record| {
            let cells = config.with_value(|c| {
                c.edit_fields
                    .iter()
                    .map(|f| {
                        view! { <td class="table__cell">{record.value(&f.key).to_string()}</td> }
                    })
                    .collect_view()
            });
            let edit_record = record.clone();
            let delete_record = record.clone();

            view! {
                <tr class="table__row" data-id=record.id.clone()>
                    {cells}
                    <td class="table__cell table__cell--actions">
                        <button
                            type="button"
                            class="button button--icon"
                            title="Editar"
                            on:click=move |_| dialog.set(Some(OpenDialog::Edit(edit_record.clone())))
                        >
                            {icon("edit")}
                        </button>
                        <button
                            type="button"
                            class="button button--icon button--danger"
                            title="Deletar"
                            on:click=move |_| dialog.set(Some(OpenDialog::Delete(delete_record.clone())))
                        >
                            {icon("delete")}
                        </button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="entity-list">
            <table class="table">
                <thead>
                    <tr>
                        {headers}
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            {move || match dialog.get() {
                Some(OpenDialog::Edit(record)) => view! {
                    <EditEntityModal config=config.get_value() record=record on_close=close />
                }
                .into_any(),
                Some(OpenDialog::Delete(record)) => view! {
                    <DeleteEntityModal config=config.get_value() record=record on_close=close />
                }
                .into_any(),
                None => ().into_any(),
            }}
        </div>
    }
}
