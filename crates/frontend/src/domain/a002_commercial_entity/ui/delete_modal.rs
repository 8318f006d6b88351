use crate::shared::modal::Modal;
use contracts::domain::a002_commercial_entity::{EntityListConfig, EntityRecord, TypeToConfirm};
use leptos::prelude::*;

/// Delete confirmation: the submit button unlocks once the name is retyped
#[component]
pub fn DeleteEntityModal(
    config: EntityListConfig,
    record: EntityRecord,
    on_close: Callback<()>,
) -> impl IntoView {
    let action = config.delete_action(&record);
    let name = config.display_name(&record).to_string();
    let confirm = RwSignal::new(TypeToConfirm::new(name.clone()));
    let title = format!("Deletar {}", config.kind.display_name());
    let confirmation_field = config.confirmation_field.clone();
    let needs_confirmation = confirmation_field.is_some();
    let confirmation = RwSignal::new(String::new());
    let can_submit = move || {
        confirm.with(|c| c.is_confirmed())
            && (!needs_confirmation || confirmation.with(|v| !v.trim().is_empty()))
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="form" method="post" action=action>
                <p>
                    "Esta ação não pode ser desfeita. Digite "
                    <strong>{name}</strong>
                    " para confirmar."
                </p>
                <input
                    class="form__input"
                    type="text"
                    name="confirmacao"
                    autocomplete="off"
                    prop:value=move || confirm.with(|c| c.typed().to_string())
                    on:input=move |ev| confirm.update(|c| c.set_typed(event_target_value(&ev)))
                />
                {confirmation_field.map(|field| view! {
                    <label class="form__label" for="entity-delete-confirmation">
                        "Senha de confirmação:"
                    </label>
                    <input
                        id="entity-delete-confirmation"
                        class="form__input"
                        type="password"
                        name=field
                        autocomplete="off"
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                })}
                <div class="form__actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_close.run(())
                    >
                        "Cancelar"
                    </button>
                    <button
                        type="submit"
                        class="button button--danger"
                        prop:disabled=move || !can_submit()
                    >
                        "Deletar"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
