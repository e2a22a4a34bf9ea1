use paytring_client::{client::PaytringClient, config::ClientConfig};
use paytring_core::{
    fragments::{Address, Customer, Notes, PaymentConfig},
    request::{CreateOrder, Credentials},
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("PAYTRING_API_KEY").expect("PAYTRING_API_KEY not set");
    let api_secret = std::env::var("PAYTRING_API_SECRET").expect("PAYTRING_API_SECRET not set");

    let client = PaytringClient::new(
        ClientConfig::builder()
            .credentials(Credentials::new(api_key, api_secret))
            .build(),
    );

    let address = Address::builder()
        .firstname("John")
        .lastname("Doe")
        .line1("Address Line 1")
        .city("Pune")
        .zipcode("411001")
        .build();

    let order = CreateOrder::builder()
        .amount(1000u64) // amount in paise
        .receipt_id("TEST0001")
        .callback_url("https://example.com/callback")
        .customer(
            Customer::builder()
                .name("John Doe")
                .email("john.doe@example.com")
                .phone("9876543210")
                .build(),
        )
        .payment_config(PaymentConfig::builder().auto_capture(true).build())
        .billing_address(address.clone())
        .shipping_address(address)
        .notes(Notes::builder().udf1("checkout-demo").build())
        .build();

    let created = match client.create_order(&order).await {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::error!("Order creation failed: {}", err);
            return;
        }
    };

    let Some(order_id) = created.get_str("order_id") else {
        tracing::error!("Gateway returned no order id");
        return;
    };
    tracing::info!("Created order {}", order_id);

    match client.fetch_order(order_id).await {
        Ok(order) => tracing::info!("Order details: {}", serde_json::Value::Object(order.into_params())),
        Err(err) => tracing::error!("Fetching order failed: {}", err),
    }
}
