//! Seed Data
//! ストア初期化用のモックデータ（実バックエンドなしのデモ運用）

use chrono::{DateTime, Utc};

use crate::models::{
    ActionKind, BodyType, Car, CarStatus, FuelType, PaymentReceipt, PlanType, ReceiptStatus,
    SubscriptionAction, Transmission,
};

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("seed timestamp is valid RFC3339")
        .with_timezone(&Utc)
}

/// モック車両 6 台
pub fn mock_cars() -> Vec<Car> {
    vec![
        Car {
            id: 1,
            title: "BMW X5 M Sport - Premium SUV".to_string(),
            brand: "BMW".to_string(),
            model: "X5".to_string(),
            year: 2022,
            price: 75000,
            mileage: 25000,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            body_type: BodyType::Suv,
            color: "Alpine White".to_string(),
            description: "Immaculate BMW X5 M Sport with full service history. This premium SUV offers the perfect blend of luxury and performance.".to_string(),
            images: vec![
                "https://images.pexels.com/photos/3802510/pexels-photo-3802510.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/1213294/pexels-photo-1213294.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/3354648/pexels-photo-3354648.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            ],
            location: "Los Angeles, CA".to_string(),
            seller_id: 1,
            seller_name: "Mike Johnson".to_string(),
            seller_phone: "+1 (555) 123-4567".to_string(),
            status: CarStatus::Active,
            featured: true,
            created_at: ts("2024-01-15T10:30:00Z"),
            updated_at: ts("2024-01-15T10:30:00Z"),
        },
        Car {
            id: 2,
            title: "Tesla Model 3 - Electric Excellence".to_string(),
            brand: "Tesla".to_string(),
            model: "Model 3".to_string(),
            year: 2023,
            price: 45000,
            mileage: 15000,
            fuel_type: FuelType::Electric,
            transmission: Transmission::Automatic,
            body_type: BodyType::Sedan,
            color: "Pearl White".to_string(),
            description: "Like-new Tesla Model 3 with autopilot and premium interior. Incredible efficiency and cutting-edge technology.".to_string(),
            images: vec![
                "https://images.pexels.com/photos/9834029/pexels-photo-9834029.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/9834028/pexels-photo-9834028.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            ],
            location: "San Francisco, CA".to_string(),
            seller_id: 2,
            seller_name: "Sarah Chen".to_string(),
            seller_phone: "+1 (555) 234-5678".to_string(),
            status: CarStatus::Active,
            featured: true,
            created_at: ts("2024-01-14T14:20:00Z"),
            updated_at: ts("2024-01-14T14:20:00Z"),
        },
        Car {
            id: 3,
            title: "Mercedes-Benz C-Class AMG".to_string(),
            brand: "Mercedes-Benz".to_string(),
            model: "C-Class".to_string(),
            year: 2021,
            price: 58000,
            mileage: 35000,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            body_type: BodyType::Sedan,
            color: "Obsidian Black".to_string(),
            description: "Stunning Mercedes-Benz C-Class AMG with premium package. Luxurious interior and exceptional performance.".to_string(),
            images: vec![
                "https://images.pexels.com/photos/3849270/pexels-photo-3849270.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
                "https://images.pexels.com/photos/3849269/pexels-photo-3849269.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            ],
            location: "New York, NY".to_string(),
            seller_id: 3,
            seller_name: "David Wilson".to_string(),
            seller_phone: "+1 (555) 345-6789".to_string(),
            status: CarStatus::Active,
            featured: false,
            created_at: ts("2024-01-13T16:45:00Z"),
            updated_at: ts("2024-01-13T16:45:00Z"),
        },
        Car {
            id: 4,
            title: "Audi Q7 - Family Luxury SUV".to_string(),
            brand: "Audi".to_string(),
            model: "Q7".to_string(),
            year: 2022,
            price: 68000,
            mileage: 28000,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            body_type: BodyType::Suv,
            color: "Glacier White".to_string(),
            description: "Spacious Audi Q7 perfect for families. Premium features and excellent safety ratings.".to_string(),
            images: vec![
                "https://images.pexels.com/photos/3849267/pexels-photo-3849267.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            ],
            location: "Chicago, IL".to_string(),
            seller_id: 4,
            seller_name: "Emily Rodriguez".to_string(),
            seller_phone: "+1 (555) 456-7890".to_string(),
            status: CarStatus::Active,
            featured: true,
            created_at: ts("2024-01-12T11:30:00Z"),
            updated_at: ts("2024-01-12T11:30:00Z"),
        },
        Car {
            id: 5,
            title: "Honda Civic Type R - Sports Hatchback".to_string(),
            brand: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2023,
            price: 38000,
            mileage: 12000,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Manual,
            body_type: BodyType::Hatchback,
            color: "Championship White".to_string(),
            description: "Thrilling Honda Civic Type R with track-ready performance. Manual transmission for driving enthusiasts.".to_string(),
            images: vec![
                "https://images.pexels.com/photos/3849264/pexels-photo-3849264.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            ],
            location: "Miami, FL".to_string(),
            seller_id: 5,
            seller_name: "Alex Thompson".to_string(),
            seller_phone: "+1 (555) 567-8901".to_string(),
            status: CarStatus::Active,
            featured: false,
            created_at: ts("2024-01-11T09:15:00Z"),
            updated_at: ts("2024-01-11T09:15:00Z"),
        },
        Car {
            id: 6,
            title: "Toyota Prius Hybrid - Eco-Friendly".to_string(),
            brand: "Toyota".to_string(),
            model: "Prius".to_string(),
            year: 2021,
            price: 28000,
            mileage: 45000,
            fuel_type: FuelType::Hybrid,
            transmission: Transmission::Automatic,
            body_type: BodyType::Hatchback,
            color: "Magnetic Gray".to_string(),
            description: "Reliable Toyota Prius hybrid with excellent fuel economy. Perfect for daily commuting.".to_string(),
            images: vec![
                "https://images.pexels.com/photos/3849262/pexels-photo-3849262.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            ],
            location: "Seattle, WA".to_string(),
            seller_id: 6,
            seller_name: "Lisa Park".to_string(),
            seller_phone: "+1 (555) 678-9012".to_string(),
            status: CarStatus::Active,
            featured: false,
            created_at: ts("2024-01-10T13:25:00Z"),
            updated_at: ts("2024-01-10T13:25:00Z"),
        },
    ]
}

/// モック領収書 4 件
pub fn mock_receipts() -> Vec<PaymentReceipt> {
    const RECEIPT_IMAGE: &str =
        "https://images.pexels.com/photos/6863183/pexels-photo-6863183.jpeg?auto=compress&cs=tinysrgb&w=800";

    vec![
        PaymentReceipt {
            id: 1,
            user_id: 2,
            user_name: "Sarah Johnson".to_string(),
            user_email: "sarah@example.com".to_string(),
            plan_type: PlanType::Pro,
            plan_price: 29,
            receipt_file: RECEIPT_IMAGE.to_string(),
            file_name: "bank_transfer_receipt_001.jpg".to_string(),
            file_size: 245760,
            upload_date: ts("2024-01-20T10:30:00Z"),
            status: ReceiptStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
            rejection_reason: None,
            notes: None,
        },
        PaymentReceipt {
            id: 2,
            user_id: 4,
            user_name: "Emily Davis".to_string(),
            user_email: "emily@example.com".to_string(),
            plan_type: PlanType::Premium,
            plan_price: 59,
            receipt_file: RECEIPT_IMAGE.to_string(),
            file_name: "payment_confirmation.pdf".to_string(),
            file_size: 512000,
            upload_date: ts("2024-01-19T14:15:00Z"),
            status: ReceiptStatus::Approved,
            reviewed_by: Some("Admin User".to_string()),
            reviewed_at: Some(ts("2024-01-19T16:20:00Z")),
            rejection_reason: None,
            notes: Some("Payment verified successfully".to_string()),
        },
        PaymentReceipt {
            id: 3,
            user_id: 5,
            user_name: "David Brown".to_string(),
            user_email: "david@example.com".to_string(),
            plan_type: PlanType::Pro,
            plan_price: 29,
            receipt_file: RECEIPT_IMAGE.to_string(),
            file_name: "receipt_scan.jpg".to_string(),
            file_size: 189440,
            upload_date: ts("2024-01-18T09:45:00Z"),
            status: ReceiptStatus::Rejected,
            reviewed_by: Some("Admin User".to_string()),
            reviewed_at: Some(ts("2024-01-18T11:30:00Z")),
            rejection_reason: Some("Receipt amount does not match plan price".to_string()),
            notes: None,
        },
        PaymentReceipt {
            id: 4,
            user_id: 6,
            user_name: "Lisa Park".to_string(),
            user_email: "lisa@example.com".to_string(),
            plan_type: PlanType::Premium,
            plan_price: 59,
            receipt_file: RECEIPT_IMAGE.to_string(),
            file_name: "mobile_payment_screenshot.png".to_string(),
            file_size: 334560,
            upload_date: ts("2024-01-21T16:20:00Z"),
            status: ReceiptStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
            rejection_reason: None,
            notes: None,
        },
    ]
}

/// モック監査ログ 2 件
pub fn mock_actions() -> Vec<SubscriptionAction> {
    vec![
        SubscriptionAction {
            id: 1,
            receipt_id: 2,
            user_id: 4,
            action: ActionKind::Approve,
            admin_id: 1,
            admin_name: "Admin User".to_string(),
            timestamp: ts("2024-01-19T16:20:00Z"),
            details: "Receipt approved - Premium subscription activated for 1 month".to_string(),
            previous_status: Some("none".to_string()),
            new_status: Some("active".to_string()),
        },
        SubscriptionAction {
            id: 2,
            receipt_id: 3,
            user_id: 5,
            action: ActionKind::Reject,
            admin_id: 1,
            admin_name: "Admin User".to_string(),
            timestamp: ts("2024-01-18T11:30:00Z"),
            details: "Receipt rejected - Amount mismatch".to_string(),
            previous_status: Some("none".to_string()),
            new_status: Some("none".to_string()),
        },
    ]
}
