use std::sync::Arc;
use stock_watch::console::{run_session, ConsolePrompt, RecordingView, INVALID_OPTION};
use stock_watch::lifecycle::InventorySystem;

/// Drives the menu dialogue end to end, exactly as a user would type it.
#[tokio::test]
async fn test_console_dialogue() {
    let view = Arc::new(RecordingView::default());
    let system = InventorySystem::new(view.clone());
    let input = "\
1\nWidget\n8\n2.5\n\
3\nWidget\n15\n-1\n\
3\nGhost\n-1\n1\n\
4\n\
7\n\
2\nWidget\n\
4\n\
5\n";
    let mut prompt = ConsolePrompt::new(input.as_bytes(), view.clone());

    run_session(&system.controller, &mut prompt, view.as_ref())
        .await
        .unwrap();

    assert_eq!(
        view.messages(),
        vec![
            "Product 'Widget' added successfully.",
            "ALERT: stock full for product 'Widget'!",
            "Product 'Widget' updated.",
            "Product 'Ghost' not found.",
            "Product: Widget, Quantity: 15, Price: $2.50",
            INVALID_OPTION,
            "Product 'Widget' removed.",
            "No products in stock.",
        ]
    );

    drop(prompt);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_end_of_input_ends_session() {
    let view = Arc::new(RecordingView::default());
    let system = InventorySystem::new(view.clone());
    let mut prompt = ConsolePrompt::new("4\n".as_bytes(), view.clone());

    run_session(&system.controller, &mut prompt, view.as_ref())
        .await
        .unwrap();

    assert_eq!(view.messages(), vec!["No products in stock."]);
    system.shutdown().await.unwrap();
}
