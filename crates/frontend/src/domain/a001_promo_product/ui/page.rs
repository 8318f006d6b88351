use super::bulk_delete::BulkDeleteModal;
use super::description_modal::DescriptionModal;
use super::row::ProductRowView;
use super::view_model::ProductTableViewModel;
use crate::shared::components::table_checkbox::TableHeaderCheckbox;
use crate::shared::icons::icon;
use contracts::domain::a001_promo_product::bulk_delete::BulkDeleteGate;
use contracts::shared::routes::ProductAction;
use leptos::html;
use leptos::prelude::*;

/// Product table of a campaign or flyer page
#[component]
pub fn ProductTablePage(vm: ProductTableViewModel) -> impl IntoView {
    let form_ref = NodeRef::<html::Form>::new();
    let config = vm.config();
    let row_count = vm.table.with_untracked(|t| t.rows().len());
    let update_action = vm.action_url(ProductAction::Update).unwrap_or_default();
    let has_gtin_check = config.validate_gtin_url.is_some();

    let delete_disabled = move || !BulkDeleteGate::can_open(vm.selected_count());
    let no_data_rows = Signal::derive(move || vm.table.with(|t| t.data_rows().next().is_none()));

    let headers = config
        .fields
        .iter()
        .map(|field| {
            view! { <th class="table__header-cell">{field.label.clone()}</th> }
        })
        .collect_view();

    view! {
        <div class="product-table">
            <div class="product-table__toolbar">
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| vm.validate_format()
                >
                    {icon("barcode")}
                    " Validar formato"
                </button>
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| vm.validate_prices()
                >
                    {icon("check")}
                    " Validar preços"
                </button>
                {has_gtin_check.then(|| view! {
                    <button
                        type="button"
                        id="validate-gtin-btn"
                        class="button button--secondary"
                        prop:disabled=move || vm.gtin_disabled()
                        on:click=move |_| vm.validate_gtins()
                    >
                        {icon("products")}
                        " "
                        {move || vm.gtin_label()}
                    </button>
                })}
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| vm.clear_validations()
                >
                    {icon("eraser")}
                    " Limpar validações"
                </button>
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| vm.export()
                >
                    {icon("download")}
                    " Exportar Excel"
                </button>
                <button
                    type="button"
                    id="open-delete-modal-btn"
                    class="button button--danger"
                    prop:disabled=delete_disabled
                    on:click=move |_| vm.open_bulk_delete()
                >
                    {icon("delete")}
                    " Deletar selecionados"
                </button>
            </div>

            <form
                id="form-edit-delete"
                method="post"
                action=update_action
                node_ref=form_ref
            >
                <table class="table">
                    <thead>
                        <tr>
                            <TableHeaderCheckbox
                                checked=Signal::derive(move || vm.table.with(|t| t.all_selected()))
                                on_change=Callback::new(move |checked| vm.select_all(checked))
                                disabled=no_data_rows
                            />
                            {headers}
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {(0..row_count)
                            .map(|index| view! { <ProductRowView vm=vm index=index form_ref=form_ref /> })
                            .collect_view()}
                    </tbody>
                </table>
                <div class="product-table__footer">
                    <button type="submit" class="button button--primary">
                        {icon("save")}
                        " Salvar alterações"
                    </button>
                </div>
            </form>

            <BulkDeleteModal vm=vm form_ref=form_ref />
            <DescriptionModal vm=vm />
        </div>
    }
}
