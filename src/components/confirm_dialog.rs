use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub message: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or(AttrValue::Static("Delete"))]
    pub confirm_label: AttrValue,
}

/// Explicit confirmation step in front of every destructive action.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <div class="fixed inset-0 flex items-center justify-center bg-opacity-30 backdrop-blur-xs">
            <div class="bg-white p-6 rounded-lg shadow-lg w-96">
                <h2 class="text-xl font-bold mb-4">{ "Confirm Deletion" }</h2>
                <p class="mb-4">{ props.message.clone() }</p>
                <div class="flex justify-end space-x-4">
                    <button
                        onclick={on_cancel}
                        class="bg-gray-500 hover:bg-gray-600 text-white px-4 py-2 rounded transition duration-300"
                    >
                        { "Cancel" }
                    </button>
                    <button
                        onclick={on_confirm}
                        class="bg-red-500 hover:bg-red-600 text-white px-4 py-2 rounded transition duration-300"
                    >
                        { props.confirm_label.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}
