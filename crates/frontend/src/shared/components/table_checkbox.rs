use leptos::prelude::*;

/// Чекбокс выбора строки внутри `<td>`
///
/// Входит в форму страницы: при отправке сервер получает `name=value`
/// каждой отмеченной строки.
///
/// # Пример использования
/// ```rust,ignore
/// <TableCheckbox
///     name="selecionado"
///     value=id.clone()
///     checked=Signal::derive(move || row_selected(index))
///     on_change=Callback::new(move |checked| vm.toggle_row(index, checked))
/// />
/// ```
#[component]
pub fn TableCheckbox(
    /// Имя поля формы
    #[prop(into)]
    name: String,
    /// Значение поля формы (id строки)
    #[prop(into)]
    value: String,
    /// Сигнал состояния чекбокса
    checked: Signal<bool>,
    /// Callback вызывается при изменении состояния
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox edit-checkbox"
                name=name
                value=value
                prop:checked=checked
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </td>
    }
}

/// Чекбокс «выбрать все» для заголовка таблицы
#[component]
pub fn TableHeaderCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    /// Нет строк для выбора
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                id="select-all"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </th>
    }
}
