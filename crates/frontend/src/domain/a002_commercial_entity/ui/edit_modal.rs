use crate::shared::modal::Modal;
use contracts::domain::a002_commercial_entity::{EntityListConfig, EntityRecord};
use leptos::prelude::*;

/// Edit form prefilled from the record, posted to `/{resource}/editar/{id}`
#[component]
pub fn EditEntityModal(
    config: EntityListConfig,
    record: EntityRecord,
    on_close: Callback<()>,
) -> impl IntoView {
    let action = config.edit_action(&record);
    let title = format!("Editar {}", config.kind.display_name());

    let fields = config
        .edit_fields
        .iter()
        .map(|field| {
            let id = field.input_id();
            view! {
                <div class="form__group">
                    <label class="form__label" for=id.clone()>{field.label.clone()}</label>
                    <input
                        id=id
                        class="form__input"
                        type=field.input_type.clone()
                        name=field.key.clone()
                        value=record.value(&field.key).to_string()
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <Modal title=title on_close=on_close>
            <form class="form" method="post" action=action>
                {fields}
                <div class="form__actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_close.run(())
                    >
                        "Cancelar"
                    </button>
                    <button type="submit" class="button button--primary">"Salvar"</button>
                </div>
            </form>
        </Modal>
    }
}
