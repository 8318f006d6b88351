use super::view_model::ProductTableViewModel;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use contracts::domain::a001_promo_product::config::FieldSpec;
use leptos::prelude::*;

/// One product line.
///
/// Input values are written once from the initial data; afterwards the
/// browser owns the text and every keystroke is pushed into the view-model.
#[component]
pub fn ProductRowView(
    vm: ProductTableViewModel,
    index: usize,
    /// Main form, submitted by the blank row's "Adicionar"
    form_ref: NodeRef<leptos::html::Form>,
) -> impl IntoView {
    let Some(row) = vm.table.with_untracked(|t| t.row(index).cloned()) else {
        return ().into_any();
    };
    let config = vm.config();
    let is_new = row.is_new();

    let row_class = move || {
        let status = vm
            .table
            .with(|t| t.row(index).and_then(|r| r.status.css_class()));
        match status {
            Some(class) => format!("table__row {class}"),
            None => "table__row".to_string(),
        }
    };
    let disabled = move || vm.table.with(|t| t.row(index).is_some_and(|r| r.inputs_disabled()));

    let selection_cell = if is_new {
        view! { <td class="table__cell table__cell--checkbox"></td> }.into_any()
    } else {
        view! {
            <TableCheckbox
                name="selecionado"
                value=row.id.clone().unwrap_or_default()
                checked=Signal::derive(move || {
                    vm.table.with(|t| t.row(index).is_some_and(|r| r.selected))
                })
                on_change=Callback::new(move |checked| vm.toggle_row(index, checked))
            />
        }
        .into_any()
    };

    let cells = config
        .fields
        .iter()
        .map(|field| {
            let FieldSpec { key, kind, label } = field.clone();
            let name = row.input_name(&key);
            let initial = row.value(&key).to_string();
            let is_description = key == config.description_field && !is_new;
            let input_key = key.clone();

            view! {
                <td class="table__cell" data-field=key.clone()>
                    <input
                        class="table__input"
                        type=kind.input_type()
                        name=name
                        title=label
                        prop:value=initial
                        prop:disabled=disabled
                        on:input=move |ev| vm.input(index, &input_key, event_target_value(&ev))
                    />
                    {is_description.then(|| view! {
                        <button
                            type="button"
                            class="button button--icon"
                            title="Ver descrição"
                            on:click=move |_| vm.show_description(index)
                        >
                            {icon("eye")}
                        </button>
                    })}
                </td>
            }
        })
        .collect_view();

    let actions_cell = if is_new {
        view! {
            <td class="table__cell table__cell--actions">
                <button
                    type="button"
                    class="button button--primary"
                    on:click=move |_| vm.submit_new_row(form_ref.get_untracked())
                >
                    {icon("plus")}
                    " Adicionar"
                </button>
            </td>
        }
        .into_any()
    } else {
        view! { <td class="table__cell table__cell--actions"></td> }.into_any()
    };

    view! {
        <tr class=row_class data-new-row=is_new.then_some("true")>
            {selection_cell}
            {cells}
            {actions_cell}
        </tr>
    }
    .into_any()
}
