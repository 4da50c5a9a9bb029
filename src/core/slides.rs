/// Authored carousel entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

impl Slide {
    pub fn image_alt(&self) -> String {
        format!("{} illustration", self.title)
    }
}

pub const SLIDES: &[Slide] = &[
    Slide {
        title: "Fahmid",
        subtitle: "Product Engineer & Designer",
        description: "Passionate about creating innovative solutions at the intersection of technology and design. Specializing in user-centric product development and cutting-edge engineering practices.",
        image: "/images/fahmid.jpg",
    },
    Slide {
        title: "GPT Protocol",
        subtitle: "Blockchain & AI Integration",
        description: "Leading the development of GPT Protocol, a groundbreaking project that combines blockchain technology with artificial intelligence. Key aspects include:\n\n\
            • Deploying a Polygon zkEVM based blockchain\n\
            • Developing with NextJS and Generative AI\n\
            • Building a multi-chain bridge using Hyperlane\n\
            • Writing smart contracts for decentralized applications\n\
            • Integrating AI models with blockchain infrastructure\n\n\
            This project aims to create a new paradigm in decentralized AI-powered applications, leveraging the security and transparency of blockchain with the power of advanced AI models.",
        image: "/images/gpt-protocol.jpg",
    },
    Slide {
        title: "LegixAI",
        subtitle: "AI for Accounting Firms",
        description: "Developing an innovative AI pipeline for accounting firms, revolutionizing how financial data is processed and analyzed. Key features include:\n\n\
            • Building with NextJS for a responsive, modern frontend\n\
            • Implementing advanced AI processing systems for financial document analysis\n\
            • Utilizing AWS for scalable, secure cloud infrastructure\n\
            • Creating intuitive dashboards for data visualization\n\
            • Automating routine accounting tasks with machine learning\n\n\
            LegixAI aims to significantly reduce the time and effort required for financial reporting and analysis, allowing accounting professionals to focus on high-value strategic tasks.",
        image: "/images/legixai.jpg",
    },
];
