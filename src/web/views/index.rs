use maud::html;
use poem::handler;
use poem::web::Html;

use crate::prelude::*;
use crate::web::partials::{document, Page, SUPPORT_EMAIL};

/// Introduction page.
#[handler]
#[instrument(skip_all)]
pub async fn get() -> Html<String> {
    let markup = document(
        "医疗费用预测",
        Page::Home,
        html! {
            div.content {
                h1.title { "医疗费用预测应用💰" }
                p { "这个应用利用机器学习模型来预测医疗费用，为保险公司的保险定价提供参考。" }

                h2."is-size-4" { "背景介绍" }
                ul {
                    li { "开发目标：帮助保险公司合理定价保险产品，控制风险；" }
                    li { "模型算法：利用随机森林回归算法训练医疗费用预测模型。" }
                }

                h2."is-size-4" { "使用指南" }
                ul {
                    li { "单击左侧" a href="/predict" { "预测医疗费用" } "进入预测页面。" }
                    li { "输入准确完整的被保险人信息，可以得到更准确的费用预测。" }
                    li { "预测结果可以作为保险定价的重要参考，但需审慎决策。" }
                    li { "有任何问题欢迎联系我们的技术支持。" }
                }

                p {
                    "技术支持✉："
                    a href=(format!("mailto:{}", SUPPORT_EMAIL)) { (SUPPORT_EMAIL) }
                }
            }
        },
    );
    Html(markup.into_string())
}
