use super::view_model::ProductTableViewModel;
use crate::shared::modal::Modal;
use leptos::prelude::*;

#[component]
pub fn DescriptionModal(vm: ProductTableViewModel) -> impl IntoView {
    let on_close = Callback::new(move |_| vm.close_description());

    move || {
        vm.description.get().map(|text| {
            view! {
                <Modal title="Descrição".to_string() on_close=on_close>
                    <p class="description-modal__text">{text}</p>
                </Modal>
            }
        })
    }
}
