use super::view_model::ProductTableViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_promo_product::bulk_delete::BulkDeleteState;
use leptos::prelude::*;

/// Confirmation dialog of "Deletar selecionados"
#[component]
pub fn BulkDeleteModal(
    vm: ProductTableViewModel,
    form_ref: NodeRef<leptos::html::Form>,
) -> impl IntoView {
    let count = move || match vm.bulk_delete.with(|g| g.state()) {
        BulkDeleteState::Armed { count } => count,
        _ => vm.selected_count(),
    };
    let can_confirm = move || vm.bulk_delete.with(|g| g.can_confirm());
    let on_close = Callback::new(move |_| vm.dismiss_bulk_delete());

    view! {
        <Show when=move || vm.bulk_delete.with(|g| g.is_open())>
            <Modal
                title="Deletar produtos selecionados".to_string()
                on_close=on_close
                action_buttons=move || view! {
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| vm.dismiss_bulk_delete()
                    >
                        "Cancelar"
                    </button>
                    <button
                        type="button"
                        class="button button--danger"
                        prop:disabled=move || !can_confirm()
                        on:click=move |_| vm.confirm_bulk_delete(form_ref.get_untracked())
                    >
                        {icon("delete")}
                        " Deletar"
                    </button>
                }
            >
                <p>
                    {move || format!("Você está prestes a deletar {} produto(s).", count())}
                </p>
                <label class="form__label" for="bulk-delete-confirmation">
                    "Digite o texto de confirmação para continuar:"
                </label>
                <input
                    id="bulk-delete-confirmation"
                    class="form__input"
                    type="text"
                    autocomplete="off"
                    prop:value=move || vm.bulk_delete.with(|g| g.token().to_string())
                    on:input=move |ev| vm.set_delete_token(event_target_value(&ev))
                />
            </Modal>
        </Show>
    }
}
